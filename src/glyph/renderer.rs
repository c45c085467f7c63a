//! Block-letter mask synthesis
//!
//! Draws one glyph, black on white, centered on a canvas of the requested
//! size. The ink bounding box is centered with floor division, so an odd
//! remainder pixel lands on the bottom/right side.

use std::sync::Arc;

use log::debug;
use ndarray::Array2;

use crate::glyph::face::FontFace;
use crate::glyph::resolver::default_face;
use crate::io::error::{Result, invalid_parameter};
use crate::raster::Raster;

/// Renders single glyphs into binary masks
#[derive(Debug, Clone)]
pub struct GlyphMaskRenderer {
    face: Arc<FontFace>,
}

impl Default for GlyphMaskRenderer {
    fn default() -> Self {
        Self::new(Arc::new(default_face()))
    }
}

impl GlyphMaskRenderer {
    /// Create a renderer drawing with `face`
    pub const fn new(face: Arc<FontFace>) -> Self {
        Self { face }
    }

    /// Face used for drawing
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Render `glyph` centered on a white `height` x `width` canvas
    ///
    /// The glyph is drawn at `round(min(height, width) * size_ratio)` pixels.
    /// Ink is 0.0, background 1.0, anti-aliased edges in between.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `height` or `width` is zero
    /// - `glyph` is not exactly one character
    /// - `size_ratio` is not in `(0, 1]`
    pub fn render(
        &self,
        height: usize,
        width: usize,
        glyph: &str,
        size_ratio: f32,
    ) -> Result<Raster> {
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        validate_glyph(glyph, size_ratio)?;

        let font_size = ((height.min(width) as f32) * size_ratio).round().max(1.0) as u32;
        let coverage = self.face.rasterize(glyph, font_size);

        let x = centering_offset(width, coverage.width());
        let y = centering_offset(height, coverage.height());
        debug!(
            "Glyph '{glyph}' at {font_size}px: ink {}x{} placed at ({x}, {y})",
            coverage.width(),
            coverage.height()
        );

        let mut canvas = Array2::<f32>::ones((height, width));
        for (row, col, ink) in coverage.inked() {
            let target_row = y + row as i64;
            let target_col = x + col as i64;
            if target_row < 0 || target_col < 0 {
                continue;
            }
            if let Some(pixel) = canvas.get_mut((target_row as usize, target_col as usize)) {
                *pixel *= 1.0 - ink;
            }
        }

        Raster::new(canvas)
    }
}

/// Check a glyph and size ratio without rendering anything
///
/// # Errors
///
/// Returns an error if `glyph` is not exactly one character or
/// `size_ratio` is not in `(0, 1]`
pub fn validate_glyph(glyph: &str, size_ratio: f32) -> Result<()> {
    if glyph.chars().count() != 1 {
        return Err(invalid_parameter(
            "glyph",
            &glyph,
            &"must be exactly one character",
        ));
    }
    if !(size_ratio.is_finite() && size_ratio > 0.0 && size_ratio <= 1.0) {
        return Err(invalid_parameter(
            "size_ratio",
            &size_ratio,
            &"must be in (0, 1]",
        ));
    }
    Ok(())
}

/// Floor-divided offset that centers `extent` within `available`
///
/// Negative when the extent is larger than the space available.
pub const fn centering_offset(available: usize, extent: usize) -> i64 {
    (available as i64 - extent as i64).div_euclid(2)
}
