//! Four-panel meme renderer that visualizes selection bias
//!
//! A reference image and a sampled model of it are shown next to a block
//! letter mask and the sample with the masked region erased. The crate
//! synthesizes the mask, applies it, and composes the titled panel figure.

#![forbid(unsafe_code)]

/// Multi-panel figure layout, drawing and export
pub mod compose;
/// Glyph rasterization and letter masks
pub mod glyph;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grayscale raster type and shape normalization
pub mod raster;
/// Threshold-based selective erasure
pub mod selection;

pub use compose::{ComposeOptions, MemeConfig, Panel, PanelCompositor, create_selection_meme};
pub use glyph::GlyphMaskRenderer;
pub use io::error::{MemeError, Result};
pub use raster::Raster;
pub use selection::{SelectionMask, apply_selection_mask};
