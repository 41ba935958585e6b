//! Error types for nLoss operations

use thiserror::Error;

/// Result type for nLoss operations
pub type NlossResult<T> = Result<T, NlossError>;

/// Errors that can occur while loading, transforming or saving images
#[derive(Error, Debug)]
pub enum NlossError {
    /// Bad signature, truncated header or truncated pixel data
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Well-formed input using a bit depth or compression we do not handle
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No image loaded")]
    NoBufferLoaded,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NlossError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        NlossError::InvalidParameter(msg.into())
    }
}
