//! Font faces and glyph coverage maps
//!
//! A face turns text into a coverage map: a grid of ink coverage in `[0, 1]`
//! trimmed to the ink bounding box. Callers position text by that box, so
//! outline fonts and the built-in block face behave the same way.

use std::fmt;

use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use ndarray::{Array2, Axis, Slice};

use crate::glyph::builtin;

/// Ink coverage of rendered text, trimmed to its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCoverage {
    coverage: Array2<f32>,
}

impl GlyphCoverage {
    /// Coverage with no ink
    pub fn empty() -> Self {
        Self {
            coverage: Array2::zeros((0, 0)),
        }
    }

    /// Wrap a `(height, width)` coverage array, clipping values to `[0, 1]`
    pub fn from_array(coverage: Array2<f32>) -> Self {
        Self {
            coverage: coverage.mapv_into(|c| c.clamp(0.0, 1.0)),
        }
    }

    /// Drop blank border rows and columns so the map spans exactly the ink
    #[must_use]
    pub fn trimmed(self) -> Self {
        let inked = |lane: ndarray::ArrayView1<'_, f32>| lane.iter().any(|&c| c > 0.0);
        let rows: Vec<bool> = self.coverage.axis_iter(Axis(0)).map(inked).collect();
        let cols: Vec<bool> = self.coverage.axis_iter(Axis(1)).map(inked).collect();

        let (Some(top), Some(bottom)) = (
            rows.iter().position(|&r| r),
            rows.iter().rposition(|&r| r),
        ) else {
            return Self::empty();
        };
        let (Some(left), Some(right)) = (
            cols.iter().position(|&c| c),
            cols.iter().rposition(|&c| c),
        ) else {
            return Self::empty();
        };

        Self {
            coverage: self
                .coverage
                .slice_axis(Axis(0), Slice::from(top..=bottom))
                .slice_axis(Axis(1), Slice::from(left..=right))
                .to_owned(),
        }
    }

    /// Ink width in pixels
    pub fn width(&self) -> usize {
        self.coverage.ncols()
    }

    /// Ink height in pixels
    pub fn height(&self) -> usize {
        self.coverage.nrows()
    }

    /// Whether any ink was produced
    pub fn is_empty(&self) -> bool {
        self.coverage.is_empty()
    }

    /// Coverage at `(row, col)` of the ink box
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.coverage.get((row, col)).copied()
    }

    /// Iterate over `(row, col, coverage)` for every inked pixel
    pub fn inked(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.coverage
            .indexed_iter()
            .filter(|(_, c)| **c > 0.0)
            .map(|((row, col), &c)| (row, col, c))
    }
}

/// A face capable of rasterizing text
#[derive(Default)]
pub enum FontFace {
    /// Scalable outline font loaded from font file bytes
    Outline {
        /// Identifier the face was resolved from
        source: String,
        /// Parsed font
        font: FontVec,
    },
    /// Built-in 5x7 block face
    #[default]
    Builtin,
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline { source, .. } => f.debug_tuple("Outline").field(source).finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl FontFace {
    /// Parse font file bytes into an outline face
    ///
    /// Returns `None` when the bytes are not a usable font.
    pub fn from_bytes(source: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        FontVec::try_from_vec(bytes).ok().map(|font| Self::Outline {
            source: source.into(),
            font,
        })
    }

    /// Whether this is the built-in fallback face
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Rasterize `text` with an em size of `pixel_size` pixels
    pub fn rasterize(&self, text: &str, pixel_size: u32) -> GlyphCoverage {
        match self {
            Self::Outline { font, .. } => rasterize_outline(font, text, pixel_size),
            Self::Builtin => builtin::rasterize(text, pixel_size),
        }
    }
}

// PxScale measures ascent-to-descent height, so convert from the em size
fn em_scale(font: &FontVec, pixel_size: u32) -> PxScale {
    let em = pixel_size.max(1) as f32;
    match font.units_per_em() {
        Some(units) if units > 0.0 => PxScale::from(em * font.height_unscaled() / units),
        _ => PxScale::from(em),
    }
}

fn rasterize_outline(font: &FontVec, text: &str, pixel_size: u32) -> GlyphCoverage {
    let scale = em_scale(font, pixel_size);
    let scaled = font.as_scaled(scale);

    let mut caret = 0.0_f32;
    let mut previous: Option<GlyphId> = None;
    let mut outlined: Vec<OutlinedGlyph> = Vec::new();

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outline) = font.outline_glyph(glyph) {
            outlined.push(outline);
        }
    }

    let Some((min_x, min_y, max_x, max_y)) = outlined
        .iter()
        .map(OutlinedGlyph::px_bounds)
        .map(|b| (b.min.x.floor(), b.min.y.floor(), b.max.x.ceil(), b.max.y.ceil()))
        .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
    else {
        return GlyphCoverage::empty();
    };

    let width = (max_x - min_x).max(0.0) as usize;
    let height = (max_y - min_y).max(0.0) as usize;
    let mut coverage = Array2::<f32>::zeros((height, width));

    for outline in &outlined {
        let bounds = outline.px_bounds();
        let offset_x = (bounds.min.x.floor() - min_x) as usize;
        let offset_y = (bounds.min.y.floor() - min_y) as usize;
        outline.draw(|x, y, c| {
            let pos = (offset_y + y as usize, offset_x + x as usize);
            if let Some(cell) = coverage.get_mut(pos) {
                *cell = (*cell + c).min(1.0);
            }
        });
    }

    GlyphCoverage::from_array(coverage).trimmed()
}
