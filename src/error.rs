//! Custom error types for spritesheet.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the spritesheet library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to list a directory.
    #[error("failed to read directory {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or decode a PNG file.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write the output PNG.
    #[error("failed to write spritesheet to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Mode string did not name a composer.
    #[error("unknown mode {0:?}, expected one of: a, action, i, individual")]
    UnknownMode(String),

    /// No PNG files were found to compose.
    #[error("no PNG images found in {path}")]
    EmptyInput { path: PathBuf },

    /// Composed canvas dimensions are not representable.
    #[error("unsupported canvas dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: u64,
        height: u64,
        reason: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for spritesheet operations.
pub type Result<T> = std::result::Result<T, Error>;
