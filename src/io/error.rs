//! Error types for mask rendering, selection and panel compositing

use std::fmt;
use std::path::PathBuf;

/// Main error type for all meme rendering operations
#[derive(Debug)]
pub enum MemeError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A caller-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The compositor received the wrong number of panels
    PanelCount {
        /// Number of panels the layout requires
        expected: usize,
        /// Number of panels supplied
        found: usize,
    },

    /// Two rasters that must correspond pixel for pixel differ in shape
    ShapeMismatch {
        /// Required shape (height, width)
        expected: (usize, usize),
        /// Shape that was supplied (height, width)
        found: (usize, usize),
    },

    /// A raster or target shape has no pixels
    EmptyImage {
        /// Operation that received the empty raster
        operation: &'static str,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl MemeError {
    /// Whether this error reports invalid caller configuration
    ///
    /// Configuration errors are never corrected silently; retrying with the
    /// same arguments always fails the same way.
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::PanelCount { .. }
        )
    }
}

impl fmt::Display for MemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PanelCount { expected, found } => {
                write!(f, "Expected exactly {expected} panels, got {found}")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Shape mismatch: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::EmptyImage { operation } => {
                write!(f, "Empty image passed to {operation}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for meme rendering results
pub type Result<T> = std::result::Result<T, MemeError>;

impl From<image::ImageError> for MemeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MemeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MemeError {
    MemeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error
pub const fn shape_mismatch(expected: (usize, usize), found: (usize, usize)) -> MemeError {
    MemeError::ShapeMismatch { expected, found }
}
