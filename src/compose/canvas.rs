//! Caller-owned RGBA rendering surface
//!
//! The canvas owns its pixel buffer outright. Rendering borrows it mutably
//! and the buffer is released when the canvas is dropped, on success and
//! error paths alike.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::compose::layout::PixelRect;
use crate::glyph::GlyphCoverage;
use crate::io::error::{MemeError, Result};
use crate::io::image::export_rgba;
use crate::raster::Raster;

/// RGBA surface panels and titles are drawn onto
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `background`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MemeError::EmptyImage {
                operation: "canvas allocation",
            });
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, background),
        })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color at `(x, y)`, if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Paint every pixel with `color`
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
    }

    /// Draw a border of `thickness` pixels just outside `rect`
    pub fn stroke_rect(&mut self, rect: PixelRect, thickness: u32, color: Rgba<u8>) {
        for ring in 1..=thickness {
            if let Some(outline) = to_imageproc_rect(rect.expand(ring)) {
                draw_hollow_rect_mut(&mut self.pixels, outline, color);
            }
        }
    }

    /// Draw `raster` in grayscale, scaled to fill `rect`
    ///
    /// Intensities map linearly, 0 to black and 1 to white, with no
    /// contrast stretching. Upscaling keeps hard pixel edges.
    pub fn draw_raster(&mut self, raster: &Raster, rect: PixelRect) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }

        let gray = raster.to_gray_image();
        let upscaling =
            rect.width as usize >= raster.width() && rect.height as usize >= raster.height();
        let filter = if upscaling {
            FilterType::Nearest
        } else {
            FilterType::Triangle
        };
        let scaled = imageops::resize(&gray, rect.width, rect.height, filter);
        let tile = DynamicImage::ImageLuma8(scaled).to_rgba8();

        imageops::overlay(&mut self.pixels, &tile, rect.x, rect.y);
    }

    /// Blend `color` over the canvas with `coverage` as alpha, ink box at `(x, y)`
    pub fn draw_coverage(&mut self, coverage: &GlyphCoverage, x: i64, y: i64, color: Rgba<u8>) {
        for (row, col, alpha) in coverage.inked() {
            let (px, py) = (x + col as i64, y + row as i64);
            let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                continue;
            };
            if let Some(pixel) = self.pixels.get_pixel_mut_checked(px, py) {
                for (channel, &target) in pixel.0.iter_mut().zip(color.0.iter()) {
                    let blended = f32::from(*channel).mul_add(1.0 - alpha, f32::from(target) * alpha);
                    *channel = blended.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }

    /// Keep only `region`, clipped to the canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the region lies entirely outside the canvas
    pub fn crop(self, region: PixelRect) -> Result<Self> {
        let area = region
            .clamp_to(self.width(), self.height())
            .ok_or(MemeError::EmptyImage {
                operation: "canvas crop",
            })?;

        let pixels =
            imageops::crop_imm(&self.pixels, area.x as u32, area.y as u32, area.width, area.height)
                .to_image();
        Ok(Self { pixels })
    }

    /// Write the canvas to `path`, format chosen by extension
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// image cannot be encoded or written
    pub fn save(&self, path: &Path) -> Result<()> {
        export_rgba(&self.pixels, path)
    }

    /// Borrow the pixel buffer
    pub const fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Release the pixel buffer to the caller
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }
}

fn to_imageproc_rect(rect: PixelRect) -> Option<Rect> {
    if rect.width == 0 || rect.height == 0 {
        return None;
    }
    let x = i32::try_from(rect.x).ok()?;
    let y = i32::try_from(rect.y).ok()?;
    Some(Rect::at(x, y).of_size(rect.width, rect.height))
}
