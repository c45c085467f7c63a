//! Grayscale raster type and shape normalization

/// Immutable intensity grid clipped to `[0, 1]`
pub mod grid;
/// Strict and resampling shape reconciliation
pub mod shape;

pub use grid::Raster;
pub use shape::{ShapePolicy, normalize_shape};
