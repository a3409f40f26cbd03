//! Error types

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by image processing and render invocation. All failures are
/// terminal for the invocation; nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The input image is missing, unreadable, or not a valid raster image.
    #[error("Error decoding image '{path}': {source}")]
    Decode {
        path: String,
        source: image::error::ImageError,
    },

    /// A camera parameter produced a zero or undefined focal length.
    #[error("Degenerate camera geometry: {0}")]
    Arithmetic(String),

    /// The output image could not be encoded.
    #[error("Error encoding image '{path}': {source}")]
    Encode {
        path: String,
        source: image::error::ImageError,
    },

    /// A filesystem operation on the given path failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The output path has a missing or unsupported image extension.
    #[error("Unsupported image format for '{0}'")]
    UnsupportedFormat(String),

    /// The render host reported a failure.
    #[error("Render host error: {0}")]
    Host(String),
}
