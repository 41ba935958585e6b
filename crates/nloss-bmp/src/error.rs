//! Error types for BMP decoding

use nloss_core::NlossError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BmpError {
    #[error("Invalid BMP file signature")]
    BadSignature,

    #[error("Only 24-bit BMP files are supported, found {0}-bit")]
    UnsupportedBitDepth(u16),

    #[error("Compressed BMP files are not supported (compression type {0})")]
    UnsupportedCompression(u32),

    #[error("Truncated {0}")]
    TruncatedData(&'static str),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

impl From<BmpError> for NlossError {
    fn from(err: BmpError) -> Self {
        match err {
            BmpError::UnsupportedBitDepth(_) | BmpError::UnsupportedCompression(_) => {
                NlossError::UnsupportedFormat(err.to_string())
            }
            BmpError::BadSignature
            | BmpError::TruncatedData(_)
            | BmpError::InvalidDimensions { .. } => NlossError::MalformedInput(err.to_string()),
        }
    }
}
