//! Input/output operations, configuration and error handling

/// Command-line interface for rendering a meme from image files
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Loading and saving rasters as image files
pub mod image;
