//! Selection bias simulation by masking sampled data

/// Threshold-based selective erasure
pub mod mask;

pub use mask::{SelectionMask, apply_selection_mask};
