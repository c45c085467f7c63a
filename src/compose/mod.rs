//! Multi-panel figure composition

/// Caller-owned rendering surface
pub mod canvas;
/// Color name and hex parsing
pub mod color;
/// Four-panel layout, drawing and export
pub mod compositor;
/// Panel geometry in pixels
pub mod layout;
/// End-to-end meme pipeline
pub mod meme;

pub use canvas::Canvas;
pub use compositor::{ComposeOptions, Panel, PanelCompositor};
pub use meme::{MemeArtifacts, MemeConfig, MemePipeline, create_selection_meme};
