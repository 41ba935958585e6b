//! BMP decoding and encoding
//!
//! Rows are stored bottom-to-top unless the height is negative, pixels are
//! stored as B, G, R, and each row is padded with zeros to four bytes.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use nloss_core::{ImageData, NlossError, NlossResult};
use tracing::debug;

use crate::{
    row_padding, BmpError, BmpLayout, FileHeader, InfoHeader, BITS_PER_PIXEL, BMP_SIGNATURE,
    BYTES_PER_PIXEL, PIXEL_DATA_OFFSET,
};

/// An 8-bit RGB raster, rows top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[u8; 3]>,
}

impl RgbImage {
    /// Converts the pixels into complex samples with zero imaginary part
    pub fn into_image_data(self) -> NlossResult<ImageData> {
        ImageData::from_rgb8(self.width, self.height, &self.pixels)
    }

    /// Clamps and floors the real part of every sample
    pub fn from_image_data(image: &ImageData) -> NlossResult<Self> {
        Ok(Self {
            width: image.width(),
            height: image.height(),
            pixels: image.to_rgb8()?,
        })
    }
}

/// Decode a BMP file held in memory
pub fn decode(bytes: &[u8]) -> Result<RgbImage, BmpError> {
    let mut cursor = Cursor::new(bytes);
    let file_header = FileHeader::read(&mut cursor)?;
    let info_header = InfoHeader::read(&mut cursor)?;

    if info_header.bits_per_pixel != BITS_PER_PIXEL {
        return Err(BmpError::UnsupportedBitDepth(info_header.bits_per_pixel));
    }
    if info_header.compression != 0 {
        return Err(BmpError::UnsupportedCompression(info_header.compression));
    }
    if info_header.width <= 0 || info_header.height == 0 {
        return Err(BmpError::InvalidDimensions {
            width: info_header.width,
            height: info_header.height,
        });
    }

    let width = info_header.width as usize;
    let height = info_header.height.unsigned_abs() as usize;
    let top_down = info_header.is_top_down();
    let padding = row_padding(width);
    let invalid = || BmpError::InvalidDimensions {
        width: info_header.width,
        height: info_header.height,
    };

    // Every row but the last carries its padding
    let row_bytes = width.checked_mul(BYTES_PER_PIXEL).ok_or_else(invalid)?;
    let required = row_bytes
        .checked_add(padding)
        .and_then(|stride| stride.checked_mul(height - 1))
        .and_then(|rows| rows.checked_add(row_bytes))
        .ok_or_else(invalid)?;

    let data = bytes
        .get(file_header.data_offset as usize..)
        .ok_or(BmpError::TruncatedData("pixel data"))?;
    if data.len() < required {
        return Err(BmpError::TruncatedData("pixel data"));
    }

    let mut pixels = vec![[0u8; 3]; width * height];
    let mut offset = 0;
    for stored_row in 0..height {
        let row = data
            .get(offset..offset + row_bytes)
            .ok_or(BmpError::TruncatedData("pixel data"))?;
        let y = if top_down {
            stored_row
        } else {
            height - 1 - stored_row
        };

        for (dst, bgr) in pixels[y * width..(y + 1) * width]
            .iter_mut()
            .zip(row.chunks_exact(BYTES_PER_PIXEL))
        {
            *dst = [bgr[2], bgr[1], bgr[0]];
        }
        offset += row_bytes + padding;
    }

    debug!(width, height, top_down, "decoded BMP");
    Ok(RgbImage {
        width,
        height,
        pixels,
    })
}

/// Encode a raster as a bottom-up, uncompressed 24-bit BMP
pub fn write_bmp<W: Write>(image: &RgbImage, writer: &mut W) -> NlossResult<()> {
    if image.pixels.len() != image.width * image.height {
        return Err(NlossError::InvalidParameter(format!(
            "{} pixels do not fill a {}x{} image",
            image.pixels.len(),
            image.width,
            image.height
        )));
    }

    let layout = BmpLayout::new(image.width, image.height);
    let to_u32 = |value: usize| {
        u32::try_from(value)
            .map_err(|_| NlossError::InvalidParameter("image too large for BMP".to_string()))
    };
    let to_i32 = |value: usize| {
        i32::try_from(value)
            .map_err(|_| NlossError::InvalidParameter("image too large for BMP".to_string()))
    };

    FileHeader {
        signature: BMP_SIGNATURE,
        file_size: to_u32(layout.file_size)?,
        reserved1: 0,
        reserved2: 0,
        data_offset: PIXEL_DATA_OFFSET,
    }
    .write(writer)?;
    InfoHeader::rgb24(
        to_i32(image.width)?,
        to_i32(image.height)?,
        to_u32(layout.data_size)?,
    )
    .write(writer)?;

    let padding = [0u8; 3];
    let mut row_buf = Vec::with_capacity(layout.row_size);
    if image.width > 0 {
        for row in image.pixels.chunks_exact(image.width).rev() {
            row_buf.clear();
            for rgb in row {
                row_buf.extend_from_slice(&[rgb[2], rgb[1], rgb[0]]);
            }
            row_buf.extend_from_slice(&padding[..layout.padding]);
            writer.write_all(&row_buf)?;
        }
    }
    Ok(())
}

/// Encode a raster into an in-memory BMP file
pub fn encode(image: &RgbImage) -> NlossResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(BmpLayout::new(image.width, image.height).file_size);
    write_bmp(image, &mut bytes)?;
    Ok(bytes)
}

/// Read and decode a BMP file from a path
pub fn decode_file<P: AsRef<Path>>(path: P) -> NlossResult<RgbImage> {
    let bytes = fs::read(path)?;
    Ok(decode(&bytes)?)
}

/// Encode and write a BMP file to a path
pub fn encode_file<P: AsRef<Path>>(image: &RgbImage, path: P) -> NlossResult<()> {
    let bytes = encode(image)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{LittleEndian, WriteBytesExt};

    /// A 2x2 file laid out exactly as the encoder writes it
    fn minimal_2x2() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"BM");
        bytes.write_u32::<LittleEndian>(70).unwrap();
        bytes.write_u32::<LittleEndian>(0).unwrap();
        bytes.write_u32::<LittleEndian>(54).unwrap();
        for v in [40u32, 2, 2] {
            bytes.write_u32::<LittleEndian>(v).unwrap();
        }
        bytes.write_u16::<LittleEndian>(1).unwrap();
        bytes.write_u16::<LittleEndian>(24).unwrap();
        for v in [0u32, 16, 2835, 2835, 0, 0] {
            bytes.write_u32::<LittleEndian>(v).unwrap();
        }
        // Bottom row first: blue, green | then top row: red, white
        bytes.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0]);
        bytes.extend_from_slice(&[0, 0, 255, 255, 255, 255, 0, 0]);
        bytes
    }

    #[test]
    fn test_decode_minimal() {
        let image = decode(&minimal_2x2()).unwrap();
        assert_eq!(image.width, 2);
        assert_eq!(image.height, 2);
        assert_eq!(
            image.pixels,
            vec![[255, 0, 0], [255, 255, 255], [0, 0, 255], [0, 255, 0]]
        );
    }

    #[test]
    fn test_encode_reproduces_bytes() {
        let bytes = minimal_2x2();
        let image = decode(&bytes).unwrap();
        assert_eq!(encode(&image).unwrap(), bytes);
    }

    #[test]
    fn test_top_down_rows() {
        let mut bytes = minimal_2x2();
        // Flip the sign of the height field
        bytes[22..26].copy_from_slice(&(-2i32).to_le_bytes());
        let image = decode(&bytes).unwrap();
        assert_eq!(
            image.pixels,
            vec![[0, 0, 255], [0, 255, 0], [255, 0, 0], [255, 255, 255]]
        );
    }

    #[test]
    fn test_unpadded_width() {
        let image = RgbImage {
            width: 4,
            height: 1,
            pixels: vec![[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]],
        };
        let bytes = encode(&image).unwrap();
        assert_eq!(bytes.len(), 54 + 12);
        assert_eq!(&bytes[54..57], &[3, 2, 1]);
        assert_eq!(decode(&bytes).unwrap(), image);
    }

    #[test]
    fn test_rejects_unsupported() {
        let mut bytes = minimal_2x2();
        bytes[28] = 32;
        assert_eq!(decode(&bytes), Err(BmpError::UnsupportedBitDepth(32)));

        let mut bytes = minimal_2x2();
        bytes[30] = 1;
        assert_eq!(decode(&bytes), Err(BmpError::UnsupportedCompression(1)));

        let mut bytes = minimal_2x2();
        bytes[0] = b'X';
        assert_eq!(decode(&bytes), Err(BmpError::BadSignature));
    }

    #[test]
    fn test_rejects_truncated() {
        let bytes = minimal_2x2();
        assert_eq!(
            decode(&bytes[..30]),
            Err(BmpError::TruncatedData("info header"))
        );
        assert_eq!(
            decode(&bytes[..60]),
            Err(BmpError::TruncatedData("pixel data"))
        );
    }

    #[test]
    fn test_oversized_header_is_an_error() {
        let mut bytes = minimal_2x2();
        bytes.truncate(54);
        bytes[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
        bytes[22..26].copy_from_slice(&i32::MAX.to_le_bytes());
        let result = decode(&bytes);
        assert!(matches!(
            result,
            Err(BmpError::TruncatedData("pixel data")) | Err(BmpError::InvalidDimensions { .. })
        ));

        // Top-down with the most negative height
        bytes[22..26].copy_from_slice(&i32::MIN.to_le_bytes());
        assert!(decode(&bytes).is_err());
    }

    #[test]
    fn test_missing_final_padding_is_accepted() {
        let mut bytes = minimal_2x2();
        bytes.truncate(bytes.len() - 2);
        assert_eq!(decode(&bytes).unwrap(), decode(&minimal_2x2()).unwrap());
    }

    #[test]
    fn test_error_taxonomy() {
        let err: NlossError = BmpError::UnsupportedBitDepth(8).into();
        assert!(matches!(err, NlossError::UnsupportedFormat(_)));
        let err: NlossError = BmpError::TruncatedData("pixel data").into();
        assert!(matches!(err, NlossError::MalformedInput(_)));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.bmp");
        let image = decode(&minimal_2x2()).unwrap();
        encode_file(&image, &path).unwrap();
        assert_eq!(decode_file(&path).unwrap(), image);

        let missing = decode_file(dir.path().join("missing.bmp"));
        assert!(matches!(missing, Err(NlossError::IoError(_))));
    }
}
