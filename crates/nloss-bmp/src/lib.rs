//! Uncompressed 24-bit BMP codec
//!
//! Decodes BMP files into 8-bit RGB rasters and encodes them back. Only the
//! classic `BITMAPINFOHEADER` layout with 24 bits per pixel and no
//! compression is supported.

pub mod codec;
pub mod error;
pub mod header;

pub use codec::*;
pub use error::BmpError;
pub use header::*;
