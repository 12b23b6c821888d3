use std::path::PathBuf;

use thiserror::Error;

/// Error type for matting and per-image processing
///
/// The matting algorithm itself cannot fail; these variants describe the
/// failures of the surrounding decode, validate, resize and encode steps.
/// A batch records them per image and carries on.
#[derive(Debug, Error)]
pub enum MatteError {
    /// Raw buffer length does not match `width * height * channels`
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Image has a zero width or height
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Decoding or encoding through the image codec failed
    #[error("Image codec error for {path}: {source}")]
    Codec {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Contain resize failed
    #[error(transparent)]
    Resize(#[from] ResizeError),

    /// Filesystem error while preparing or writing files
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MatteError {
    pub(crate) fn codec(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Codec {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error type for the contain resize
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// Target edge length is zero
    #[error("Target size must be non-zero, got {size}")]
    InvalidTargetSize { size: u32 },

    /// Source image has a zero dimension
    #[error("Cannot resize an empty image")]
    EmptyImage,

    /// Scaled image does not fit the output canvas
    #[error(transparent)]
    Padding(#[from] PaddingError),
}

/// Error type for padding operations
///
/// This error type represents failures that can occur during
/// image padding operations, typically related to size constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaddingError {
    /// Padding width is smaller than the image width
    #[error("Padding width ({pad_width}) must be greater than or equal to image width ({width})")]
    PaddingWidthTooSmall { width: u32, pad_width: u32 },

    /// Padding height is smaller than the image height
    #[error(
        "Padding height ({pad_height}) must be greater than or equal to image height ({height})"
    )]
    PaddingHeightTooSmall { height: u32, pad_height: u32 },
}
