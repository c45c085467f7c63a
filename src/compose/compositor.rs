//! Four-panel figure assembly
//!
//! Panels are normalized to the first panel's shape, laid out in one row,
//! drawn in grayscale with a bold title and thin border each, then cropped
//! tightly and written out.

use std::path::Path;
use std::sync::Arc;

use image::Rgba;
use log::{debug, info};

use crate::compose::canvas::Canvas;
use crate::compose::color::{BLACK, PINK, parse_color};
use crate::compose::layout::{FigureLayout, figure_size, title_pixel_size};
use crate::glyph::FontFace;
use crate::glyph::resolver::default_face;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER_COLOR, DEFAULT_DPI, MAX_DPI, PANEL_COUNT, PANEL_TITLES,
};
use crate::io::error::{MemeError, Result, invalid_parameter};
use crate::raster::{Raster, ShapePolicy, normalize_shape};

/// One titled image tile of the composite
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    image: Raster,
    title: String,
}

impl Panel {
    /// Create a panel showing `image` under `title`
    pub fn new(image: Raster, title: impl Into<String>) -> Self {
        Self {
            image,
            title: title.into(),
        }
    }

    /// The four meme panels in their fixed order with their standard titles
    pub fn meme_set(reality: Raster, model: Raster, mask: Raster, estimate: Raster) -> Vec<Self> {
        [reality, model, mask, estimate]
            .into_iter()
            .zip(PANEL_TITLES)
            .map(|(image, title)| Self::new(image, title))
            .collect()
    }

    /// Image shown in the panel
    pub const fn image(&self) -> &Raster {
        &self.image
    }

    /// Title drawn above the panel
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Presentation parameters for the composite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Figure background
    pub background: Rgba<u8>,
    /// Panel border color
    pub border_color: Rgba<u8>,
    /// Title text color
    pub title_color: Rgba<u8>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            background: PINK,
            border_color: BLACK,
            title_color: BLACK,
        }
    }
}

impl ComposeOptions {
    /// Build options from a resolution and color names or hex strings
    ///
    /// # Errors
    ///
    /// Returns an error if the dpi is out of range or a color is unknown
    pub fn new(dpi: u32, background: &str, border_color: &str) -> Result<Self> {
        let options = Self {
            dpi,
            background: parse_color(background)?,
            border_color: parse_color(border_color)?,
            ..Self::default()
        };
        options.validate()?;
        Ok(options)
    }

    /// Default options with the named default colors parsed
    ///
    /// # Errors
    ///
    /// Returns an error if the configured default colors are malformed
    pub fn from_defaults() -> Result<Self> {
        Self::new(DEFAULT_DPI, DEFAULT_BACKGROUND, DEFAULT_BORDER_COLOR)
    }

    /// Check that the resolution is usable
    ///
    /// # Errors
    ///
    /// Returns an error if `dpi` is zero or above the safety limit
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 || self.dpi > MAX_DPI {
            return Err(invalid_parameter(
                "dpi",
                &self.dpi,
                &format!("must be between 1 and {MAX_DPI}"),
            ));
        }
        Ok(())
    }
}

/// Lays out and renders the four-panel composite
#[derive(Debug, Clone)]
pub struct PanelCompositor {
    options: ComposeOptions,
    face: Arc<FontFace>,
}

impl Default for PanelCompositor {
    fn default() -> Self {
        Self::new(ComposeOptions::default(), Arc::new(default_face()))
    }
}

impl PanelCompositor {
    /// Create a compositor drawing titles with `face`
    pub const fn new(options: ComposeOptions, face: Arc<FontFace>) -> Self {
        Self { options, face }
    }

    /// Presentation parameters in use
    pub const fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Allocate an empty figure canvas at the configured resolution
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid
    pub fn figure_canvas(&self) -> Result<Canvas> {
        self.options.validate()?;
        let (width, height) = figure_size(self.options.dpi);
        Canvas::new(width, height, self.options.background)
    }

    /// Bring every panel image to the first panel's shape
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly four panels or a panel
    /// cannot be resampled
    pub fn normalize_panels(panels: &[Panel]) -> Result<Vec<Raster>> {
        check_panel_count(panels)?;
        let Some(reference) = panels.first().map(|panel| panel.image.shape()) else {
            return Err(MemeError::PanelCount {
                expected: PANEL_COUNT,
                found: 0,
            });
        };

        panels
            .iter()
            .map(|panel| normalize_shape(&panel.image, reference, ShapePolicy::Resample))
            .collect()
    }

    /// Render `panels` onto `canvas` and return it cropped to the content
    ///
    /// The canvas is consumed; on error it is dropped before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly four panels, a panel cannot
    /// be normalized, or the options are invalid
    pub fn compose_into(&self, mut canvas: Canvas, panels: &[Panel]) -> Result<Canvas> {
        self.options.validate()?;
        let images = Self::normalize_panels(panels)?;
        let shape = images
            .first()
            .map(Raster::shape)
            .ok_or(MemeError::EmptyImage {
                operation: "panel composition",
            })?;

        let title_size = title_pixel_size(self.options.dpi);
        let titles: Vec<_> = panels
            .iter()
            .map(|panel| self.face.rasterize(&panel.title, title_size))
            .collect();
        let title_extents: Vec<_> = titles.iter().map(|t| (t.width(), t.height())).collect();

        let layout = FigureLayout::compute(
            canvas.width(),
            canvas.height(),
            self.options.dpi,
            shape,
            &title_extents,
        )?;
        debug!(
            "Figure {}x{} at {} dpi, border {}px",
            layout.width, layout.height, self.options.dpi, layout.border_width
        );

        canvas.fill(self.options.background);
        for ((image, title), frame) in images.iter().zip(&titles).zip(&layout.panels) {
            canvas.draw_raster(image, frame.image);
            canvas.stroke_rect(frame.image, layout.border_width, self.options.border_color);
            if let Some(title_box) = frame.title {
                canvas.draw_coverage(title, title_box.x, title_box.y, self.options.title_color);
            }
        }

        let region = layout.crop_region().ok_or(MemeError::EmptyImage {
            operation: "figure crop",
        })?;
        canvas.crop(region)
    }

    /// Render `panels` onto a fresh figure canvas owned by the caller
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly four panels, a panel cannot
    /// be normalized, or the options are invalid
    pub fn render(&self, panels: &[Panel]) -> Result<Canvas> {
        check_panel_count(panels)?;
        self.compose_into(self.figure_canvas()?, panels)
    }

    /// Render `panels` and write the composite to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written
    pub fn compose(&self, panels: &[Panel], output: &Path) -> Result<()> {
        let canvas = self.render(panels)?;
        canvas.save(output)?;
        info!(
            "Wrote {}x{} composite to '{}'",
            canvas.width(),
            canvas.height(),
            output.display()
        );
        Ok(())
    }
}

const fn check_panel_count(panels: &[Panel]) -> Result<()> {
    if panels.len() == PANEL_COUNT {
        Ok(())
    } else {
        Err(MemeError::PanelCount {
            expected: PANEL_COUNT,
            found: panels.len(),
        })
    }
}
