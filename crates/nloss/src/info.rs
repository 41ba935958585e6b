//! Slot statistics report

use std::fmt;

use nloss_bmp::BmpLayout;
use nloss_core::consts::CHANNELS;
use nloss_core::{Dimensions, ImageData};

/// Summary of a slot's contents
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInfo {
    Empty,
    Loaded {
        dimensions: Dimensions,
        /// Per-channel mean of the real parts, truncated toward zero
        average: [i64; CHANNELS],
        /// Layout the image would have if saved now
        layout: BmpLayout,
    },
}

impl ImageInfo {
    pub fn from_image(image: &ImageData) -> Self {
        let Ok(pixels) = image.pixels() else {
            return ImageInfo::Empty;
        };
        let dimensions = image.dimensions();

        let mut totals = [0.0f64; CHANNELS];
        for pixel in pixels {
            for (total, sample) in totals.iter_mut().zip(pixel) {
                *total += sample.re;
            }
        }
        let count = pixels.len().max(1) as f64;
        let average = totals.map(|total| (total / count).trunc() as i64);

        ImageInfo::Loaded {
            dimensions,
            average,
            layout: BmpLayout::new(dimensions.width, dimensions.height),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageInfo::Loaded { .. })
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageInfo::Empty => write!(f, "No image loaded"),
            ImageInfo::Loaded {
                dimensions,
                average,
                layout,
            } => {
                writeln!(
                    f,
                    "Image loaded: {}x{} pixels",
                    dimensions.width, dimensions.height
                )?;
                writeln!(
                    f,
                    "Average RGB values: ({}, {}, {})",
                    average[0], average[1], average[2]
                )?;
                writeln!(f, "BMP format details:")?;
                writeln!(f, "  Row padding: {} bytes", layout.padding)?;
                writeln!(f, "  Row size: {} bytes", layout.row_size)?;
                writeln!(f, "  Image data size: {} bytes", layout.data_size)?;
                write!(f, "  Total file size: {} bytes", layout.file_size)
            }
        }
    }
}
