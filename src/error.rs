//! Error types for the nbmd library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nbmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during notebook conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the notebook or writing extracted images.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The notebook file is not valid JSON or does not match the schema.
    #[error("notebook does not appear to be JSON: {0}")]
    NotJson(#[from] serde_json::Error),

    /// The notebook format version is too old to carry a flat cell list.
    #[error("unsupported notebook format version: {0}")]
    UnsupportedVersion(u32),

    /// A rich output offered no representation from the priority list.
    #[error("output MIME type must be one of {0:?}")]
    UnknownOutput(Vec<String>),

    /// An image payload was not valid base64.
    #[error("invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The image output path exists but is not a directory.
    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Error assembling the markdown output.
    #[error("rendering error: {0}")]
    Render(String),
}
