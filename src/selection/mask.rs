//! Threshold-based selective erasure
//!
//! Every pixel whose mask value falls below the threshold is erased to white;
//! every other pixel passes the sample through untouched. Masking requires
//! exact pixel correspondence, so shapes are never reconciled here.

use ndarray::Zip;

use crate::io::configuration::DEFAULT_THRESHOLD;
use crate::io::error::{Result, invalid_parameter};
use crate::raster::{Raster, ShapePolicy, normalize_shape};

/// Value written where the mask removes data
pub const ERASED: f32 = 1.0;

/// Erases sample pixels wherever a mask is dark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionMask {
    threshold: f32,
}

impl Default for SelectionMask {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SelectionMask {
    /// Create a selection mask with the given threshold
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not a finite value in `[0, 1]`
    pub fn new(threshold: f32) -> Result<Self> {
        if !(threshold.is_finite() && (0.0..=1.0).contains(&threshold)) {
            return Err(invalid_parameter(
                "threshold",
                &threshold,
                &"must be in [0, 1]",
            ));
        }
        Ok(Self { threshold })
    }

    /// Threshold below which a mask pixel counts as removed
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a mask value marks its pixel as removed
    pub fn is_masked(&self, mask_value: f32) -> bool {
        mask_value < self.threshold
    }

    /// Erase `sample` wherever `mask` is below the threshold
    ///
    /// # Errors
    ///
    /// Returns an error if `sample` and `mask` differ in shape
    pub fn apply(&self, sample: &Raster, mask: &Raster) -> Result<Raster> {
        let mask = normalize_shape(mask, sample.shape(), ShapePolicy::Strict)?;

        let selected = Zip::from(sample.values())
            .and(mask.values())
            .map_collect(|&value, &mask_value| {
                if self.is_masked(mask_value) {
                    ERASED
                } else {
                    value
                }
            });

        Raster::new(selected)
    }
}

/// Erase `sample` wherever `mask` is below `threshold`
///
/// # Errors
///
/// Returns an error if:
/// - `threshold` is not in `[0, 1]`
/// - `sample` and `mask` differ in shape
pub fn apply_selection_mask(sample: &Raster, mask: &Raster, threshold: f32) -> Result<Raster> {
    SelectionMask::new(threshold)?.apply(sample, mask)
}
