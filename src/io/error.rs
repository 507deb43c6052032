//! Error types for halftoning configuration and raw image I/O

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all halftoning operations
#[derive(Debug)]
pub enum HalftoneError {
    /// Diffusion kernel configuration was rejected at construction
    InvalidKernel {
        /// Description of what's wrong with the kernel
        reason: String,
    },

    /// Bayer matrix size is not a supported power of two
    InvalidMatrixSize {
        /// Requested matrix size
        size: usize,
        /// Explanation of why the size is invalid
        reason: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Buffer length does not match the declared image dimensions
    DimensionMismatch {
        /// Length implied by width, height and channels
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Raw file holds fewer bytes than the image needs
    ShortRead {
        /// Path to the raw file
        path: PathBuf,
        /// Bytes required
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Failed to save a preview image to disk
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

impl fmt::Display for HalftoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKernel { reason } => {
                write!(f, "Invalid diffusion kernel: {reason}")
            }
            Self::InvalidMatrixSize { size, reason } => {
                write!(f, "Invalid Bayer matrix size {size}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Buffer holds {actual} bytes but the image dimensions need {expected}"
                )
            }
            Self::ShortRead {
                path,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Raw file '{}' is too short: expected {expected} bytes, found {actual}",
                    path.display()
                )
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

impl std::error::Error for HalftoneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for halftoning results
pub type Result<T> = std::result::Result<T, HalftoneError>;

/// Attaches a path and operation to I/O failures
pub trait IoContext<T> {
    /// Convert an I/O error into [`HalftoneError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| HalftoneError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for HalftoneError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for HalftoneError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HalftoneError {
    HalftoneError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid kernel error
pub fn invalid_kernel(reason: &impl ToString) -> HalftoneError {
    HalftoneError::InvalidKernel {
        reason: reason.to_string(),
    }
}
