//! Image file loading and export for rasters and rendered figures

use std::path::Path;

use image::RgbaImage;

use crate::io::error::{MemeError, Result};
use crate::raster::Raster;

/// Load an image file as luminance in `[0, 1]`
///
/// Color images are converted to grayscale; alpha is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image has no pixels
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path).map_err(|e| MemeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Raster::from_gray_image(&img.to_luma8())
}

/// Save a raster as an 8-bit grayscale image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    raster
        .to_gray_image()
        .save(path)
        .map_err(|e| MemeError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Save an RGBA image, format chosen by the path's extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_rgba(img: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    img.save(path).map_err(|e| MemeError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MemeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
