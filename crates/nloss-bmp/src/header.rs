//! BMP file and info headers
//!
//! All multi-byte fields are little-endian.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::BmpError;

/// "BM"
pub const BMP_SIGNATURE: [u8; 2] = *b"BM";

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;

/// Offset of pixel data in files we write
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: usize = 3;

/// 72 DPI
pub const DEFAULT_PIXELS_PER_METER: i32 = 2835;

/// Zero bytes appended to each row so its length is a multiple of four
pub fn row_padding(width: usize) -> usize {
    (4 - (width * BYTES_PER_PIXEL) % 4) % 4
}

/// Byte layout of the stored pixel data for an image of a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpLayout {
    pub padding: usize,
    pub row_size: usize,
    pub data_size: usize,
    pub file_size: usize,
}

impl BmpLayout {
    pub fn new(width: usize, height: usize) -> Self {
        let padding = row_padding(width);
        let row_size = width * BYTES_PER_PIXEL + padding;
        let data_size = row_size * height;
        Self {
            padding,
            row_size,
            data_size,
            file_size: PIXEL_DATA_OFFSET as usize + data_size,
        }
    }
}

fn truncated(what: &'static str) -> impl Fn(io::Error) -> BmpError {
    move |_| BmpError::TruncatedData(what)
}

/// `BITMAPFILEHEADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub data_offset: u32,
}

impl FileHeader {
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, BmpError> {
        let err = truncated("file header");
        let mut signature = [0u8; 2];
        reader.read_exact(&mut signature).map_err(&err)?;
        let file_size = reader.read_u32::<LittleEndian>().map_err(&err)?;
        let reserved1 = reader.read_u16::<LittleEndian>().map_err(&err)?;
        let reserved2 = reader.read_u16::<LittleEndian>().map_err(&err)?;
        let data_offset = reader.read_u32::<LittleEndian>().map_err(&err)?;

        if signature != BMP_SIGNATURE {
            return Err(BmpError::BadSignature);
        }

        Ok(Self {
            signature,
            file_size,
            reserved1,
            reserved2,
            data_offset,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.signature)?;
        writer.write_u32::<LittleEndian>(self.file_size)?;
        writer.write_u16::<LittleEndian>(self.reserved1)?;
        writer.write_u16::<LittleEndian>(self.reserved2)?;
        writer.write_u32::<LittleEndian>(self.data_offset)
    }
}

/// `BITMAPINFOHEADER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    /// Positive for bottom-up rows, negative for top-down
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Header for an uncompressed 24-bit bottom-up image
    pub fn rgb24(width: i32, height: i32, image_size: u32) -> Self {
        Self {
            size: INFO_HEADER_SIZE,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size,
            x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            colors_used: 0,
            colors_important: 0,
        }
    }

    pub fn read<R: Read>(reader: &mut R) -> Result<Self, BmpError> {
        let err = truncated("info header");
        Ok(Self {
            size: reader.read_u32::<LittleEndian>().map_err(&err)?,
            width: reader.read_i32::<LittleEndian>().map_err(&err)?,
            height: reader.read_i32::<LittleEndian>().map_err(&err)?,
            planes: reader.read_u16::<LittleEndian>().map_err(&err)?,
            bits_per_pixel: reader.read_u16::<LittleEndian>().map_err(&err)?,
            compression: reader.read_u32::<LittleEndian>().map_err(&err)?,
            image_size: reader.read_u32::<LittleEndian>().map_err(&err)?,
            x_pixels_per_meter: reader.read_i32::<LittleEndian>().map_err(&err)?,
            y_pixels_per_meter: reader.read_i32::<LittleEndian>().map_err(&err)?,
            colors_used: reader.read_u32::<LittleEndian>().map_err(&err)?,
            colors_important: reader.read_u32::<LittleEndian>().map_err(&err)?,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.size)?;
        writer.write_i32::<LittleEndian>(self.width)?;
        writer.write_i32::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(self.planes)?;
        writer.write_u16::<LittleEndian>(self.bits_per_pixel)?;
        writer.write_u32::<LittleEndian>(self.compression)?;
        writer.write_u32::<LittleEndian>(self.image_size)?;
        writer.write_i32::<LittleEndian>(self.x_pixels_per_meter)?;
        writer.write_i32::<LittleEndian>(self.y_pixels_per_meter)?;
        writer.write_u32::<LittleEndian>(self.colors_used)?;
        writer.write_u32::<LittleEndian>(self.colors_important)
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}
