//! Immutable single-channel intensity grids
//!
//! Every raster holds values in `[0, 1]` with 0 as black and 1 as white.
//! Values are clipped on construction, so any arithmetic performed before a
//! raster is built can never leak out-of-range intensities downstream.

use image::{GrayImage, Luma};
use ndarray::{Array2, Array3, Axis};

use crate::io::error::{MemeError, Result, invalid_parameter};

/// Grayscale image with intensities clipped to `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    values: Array2<f32>,
}

impl Raster {
    /// Wrap a `(height, width)` array, clipping every value to `[0, 1]`
    ///
    /// Non-finite values are treated as black.
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no pixels
    pub fn new(values: Array2<f32>) -> Result<Self> {
        if values.is_empty() {
            return Err(MemeError::EmptyImage {
                operation: "raster construction",
            });
        }

        Ok(Self {
            values: values.mapv_into(clip_unit),
        })
    }

    /// Build a raster from a `(height, width, channels)` array
    ///
    /// A trailing singleton channel is squeezed away.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The channel axis holds more than one channel
    /// - The array has no pixels
    pub fn from_channels(values: Array3<f32>) -> Result<Self> {
        let (_, _, channels) = values.dim();
        if channels != 1 {
            return Err(invalid_parameter(
                "channels",
                &channels,
                &"only single-channel images are supported",
            ));
        }

        Self::new(values.index_axis_move(Axis(2), 0))
    }

    /// Raster of the given shape with every pixel set to `value`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(height: usize, width: usize, value: f32) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), value))
    }

    /// Convert an 8-bit grayscale image, mapping 0..=255 onto `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels
    pub fn from_gray_image(image: &GrayImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let mut values = Array2::zeros((height as usize, width as usize));
        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(value) = values.get_mut((y as usize, x as usize)) {
                *value = f32::from(pixel.0[0]) / 255.0;
            }
        }
        Self::new(values)
    }

    /// Convert to an 8-bit grayscale image, rounding to the nearest level
    pub fn to_gray_image(&self) -> GrayImage {
        let (height, width) = self.shape();
        GrayImage::from_fn(width as u32, height as u32, |x, y| {
            let value = self
                .values
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or(0.0);
            Luma([(value * 255.0).round() as u8])
        })
    }

    /// Shape as `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Intensity at `(row, col)`, if inside the raster
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.values.get((row, col)).copied()
    }

    /// Read-only view of the underlying values
    pub const fn values(&self) -> &Array2<f32> {
        &self.values
    }

    /// Release the underlying array
    pub fn into_values(self) -> Array2<f32> {
        self.values
    }
}

/// Clip a value to `[0, 1]`, mapping NaN to 0
pub const fn clip_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
