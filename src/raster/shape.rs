//! Shape reconciliation between rasters
//!
//! All resampling lives behind [`normalize_shape`]. Callers pick a policy:
//! selective erasure needs exact pixel correspondence and uses
//! [`ShapePolicy::Strict`], while the compositor only needs visual similarity
//! and uses [`ShapePolicy::Resample`].

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use log::debug;

use crate::io::error::{MemeError, Result, shape_mismatch};
use crate::raster::grid::Raster;

/// How to treat a raster whose shape differs from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Reject any difference with a shape mismatch error
    Strict,
    /// Resize with a bicubic filter over the 8-bit representation
    Resample,
}

/// Bring `raster` to `target` shape `(height, width)` according to `policy`
///
/// Rasters already at the target shape are returned unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The target shape has no pixels
/// - The policy is strict and the shapes differ
pub fn normalize_shape(
    raster: &Raster,
    target: (usize, usize),
    policy: ShapePolicy,
) -> Result<Raster> {
    if target.0 == 0 || target.1 == 0 {
        return Err(MemeError::EmptyImage {
            operation: "shape normalization",
        });
    }

    let found = raster.shape();
    if found == target {
        return Ok(raster.clone());
    }

    match policy {
        ShapePolicy::Strict => Err(shape_mismatch(target, found)),
        ShapePolicy::Resample => {
            debug!(
                "Resampling {}x{} raster to {}x{}",
                found.0, found.1, target.0, target.1
            );
            resample(raster, target)
        }
    }
}

// Quantizes by truncation, matching an unsigned 8-bit cast of value * 255
fn resample(raster: &Raster, target: (usize, usize)) -> Result<Raster> {
    let (height, width) = raster.shape();
    let quantized = GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let value = raster.get(y as usize, x as usize).unwrap_or(0.0);
        Luma([(value * 255.0) as u8])
    });

    let resized = imageops::resize(
        &quantized,
        target.1 as u32,
        target.0 as u32,
        FilterType::CatmullRom,
    );

    Raster::from_gray_image(&resized)
}
