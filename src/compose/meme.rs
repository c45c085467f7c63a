//! End-to-end selection bias meme: mask, erase, compose

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::compose::compositor::{ComposeOptions, Panel, PanelCompositor};
use crate::glyph::renderer::validate_glyph;
use crate::glyph::resolver::default_face;
use crate::glyph::{FontFace, GlyphMaskRenderer};
use crate::io::configuration::{DEFAULT_GLYPH, DEFAULT_SIZE_RATIO, DEFAULT_THRESHOLD};
use crate::io::error::Result;
use crate::raster::Raster;
use crate::selection::SelectionMask;

/// Parameters for one meme
#[derive(Debug, Clone, PartialEq)]
pub struct MemeConfig {
    /// Glyph drawn into the selection mask
    pub glyph: String,
    /// Glyph size as a fraction of the smaller side of the model image
    pub size_ratio: f32,
    /// Mask values below this are erased from the model
    pub threshold: f32,
    /// Presentation of the composite
    pub compose: ComposeOptions,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_GLYPH.to_string(),
            size_ratio: DEFAULT_SIZE_RATIO,
            threshold: DEFAULT_THRESHOLD,
            compose: ComposeOptions::default(),
        }
    }
}

/// Intermediate rasters produced while building a meme
#[derive(Debug, Clone, PartialEq)]
pub struct MemeArtifacts {
    /// Rendered letter mask
    pub mask: Raster,
    /// Model with the masked region erased
    pub estimate: Raster,
}

/// Renders memes with one shared font face
#[derive(Debug, Clone)]
pub struct MemePipeline {
    config: MemeConfig,
    renderer: GlyphMaskRenderer,
    selection: SelectionMask,
    compositor: PanelCompositor,
}

impl MemePipeline {
    /// Build a pipeline drawing mask and titles with `face`
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph, size ratio, threshold or compose
    /// options are invalid
    pub fn new(config: MemeConfig, face: Arc<FontFace>) -> Result<Self> {
        validate_glyph(&config.glyph, config.size_ratio)?;
        config.compose.validate()?;
        Ok(Self {
            renderer: GlyphMaskRenderer::new(Arc::clone(&face)),
            selection: SelectionMask::new(config.threshold)?,
            compositor: PanelCompositor::new(config.compose, face),
            config,
        })
    }

    /// Build a pipeline using the best bold font found on this system
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph, size ratio, threshold or compose
    /// options are invalid
    pub fn with_system_font(config: MemeConfig) -> Result<Self> {
        Self::new(config, Arc::new(default_face()))
    }

    /// Configuration in use
    pub const fn config(&self) -> &MemeConfig {
        &self.config
    }

    /// Render the mask at the model's shape and erase the masked region
    ///
    /// # Errors
    ///
    /// Returns an error if the glyph or size ratio is invalid
    pub fn artifacts(&self, model: &Raster) -> Result<MemeArtifacts> {
        let (height, width) = model.shape();
        let mask = self
            .renderer
            .render(height, width, &self.config.glyph, self.config.size_ratio)?;
        let estimate = self.selection.apply(model, &mask)?;
        Ok(MemeArtifacts { mask, estimate })
    }

    /// Build the four panels in their fixed order
    ///
    /// # Errors
    ///
    /// Returns an error if the mask cannot be rendered or applied
    pub fn panels(&self, reality: &Raster, model: &Raster) -> Result<(Vec<Panel>, MemeArtifacts)> {
        let artifacts = self.artifacts(model)?;
        let panels = Panel::meme_set(
            reality.clone(),
            model.clone(),
            artifacts.mask.clone(),
            artifacts.estimate.clone(),
        );
        Ok((panels, artifacts))
    }

    /// Render the meme for `reality` and `model` and write it to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if any stage fails or the output cannot be written
    pub fn render_to(
        &self,
        reality: &Raster,
        model: &Raster,
        output: &Path,
    ) -> Result<MemeArtifacts> {
        let (panels, artifacts) = self.panels(reality, model)?;
        self.compositor.compose(&panels, output)?;
        info!("Selection bias meme written to '{}'", output.display());
        Ok(artifacts)
    }
}

/// Render a selection bias meme with the system's best bold font
///
/// # Errors
///
/// Returns an error if any stage fails or the output cannot be written
pub fn create_selection_meme(
    reality: &Raster,
    model: &Raster,
    config: MemeConfig,
    output: &Path,
) -> Result<MemeArtifacts> {
    MemePipeline::with_system_font(config)?.render_to(reality, model, output)
}
