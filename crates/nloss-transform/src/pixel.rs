//! Per-pixel and per-tile image operations
//!
//! These are direct maps over the buffer. Every operation requires a loaded
//! image and validates its parameters before touching any sample.

use std::fmt;
use std::str::FromStr;

use nloss_core::consts::{CHANNELS, LUMA_BLUE, LUMA_GREEN, LUMA_RED, MAX_INTENSITY};
use nloss_core::{ImageData, NlossError, NlossResult, Sample, SampleValue};
use num_traits::Zero;

use crate::create_tiles;

/// Mirror axis for [`flip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipDirection {
    /// Mirror each row left to right
    #[default]
    Horizontal,
    /// Reverse the order of rows
    Vertical,
}

impl fmt::Display for FlipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipDirection::Horizontal => f.write_str("horizontally"),
            FlipDirection::Vertical => f.write_str("vertically"),
        }
    }
}

impl FromStr for FlipDirection {
    type Err = NlossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "horizontal" => Ok(FlipDirection::Horizontal),
            "v" | "vertical" => Ok(FlipDirection::Vertical),
            other => Err(NlossError::InvalidParameter(format!(
                "invalid direction '{}', use 'horizontal' or 'vertical'",
                other
            ))),
        }
    }
}

/// Reflect every sample around full intensity: `s -> 255 - s`
pub fn invert(image: &mut ImageData) -> NlossResult<()> {
    let full = Sample::new(MAX_INTENSITY, 0.0);
    image.map_samples(|s| full - s)
}

/// Replace all channels with the luma-weighted sum of R, G and B
pub fn grayscale(image: &mut ImageData) -> NlossResult<()> {
    image.map_pixels(|p| {
        let gray = p[0] * LUMA_RED + p[1] * LUMA_GREEN + p[2] * LUMA_BLUE;
        *p = [gray; CHANNELS];
    })
}

/// Replace every sample with its magnitude
pub fn absolute(image: &mut ImageData) -> NlossResult<()> {
    image.map_samples(|s| Sample::new(s.norm(), 0.0))
}

/// Snap every sample to what would be saved: clamped, floored, real
pub fn fit(image: &mut ImageData) -> NlossResult<()> {
    image.map_samples(|s| u8::from_sample(s).to_sample())
}

/// Round each real part toward zero to a multiple of `step`, dropping the imaginary part
pub fn quantize(image: &mut ImageData, step: f64) -> NlossResult<()> {
    if !image.is_loaded() {
        return Err(NlossError::NoBufferLoaded);
    }
    if !(step > 0.0) {
        return Err(NlossError::invalid_parameter("quantization step must be positive"));
    }
    image.map_samples(|s| Sample::new(s.re - s.re % step, 0.0))
}

/// Zero every sample whose magnitude does not exceed `threshold`
pub fn cutoff(image: &mut ImageData, threshold: f64) -> NlossResult<()> {
    if !image.is_loaded() {
        return Err(NlossError::NoBufferLoaded);
    }
    if !(threshold > 0.0) {
        return Err(NlossError::invalid_parameter("cutoff threshold must be positive"));
    }
    image.map_samples(|s| if s.norm() > threshold { s } else { Sample::zero() })
}

pub fn flip(image: &mut ImageData, direction: FlipDirection) -> NlossResult<()> {
    let width = image.width();
    let height = image.height();
    let pixels = image.pixels_mut()?;

    match direction {
        FlipDirection::Horizontal => {
            if width > 0 {
                pixels.chunks_exact_mut(width).for_each(|row| row.reverse());
            }
        }
        FlipDirection::Vertical => {
            for y in 0..height / 2 {
                let (top, bottom) = pixels.split_at_mut((height - 1 - y) * width);
                top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
            }
        }
    }
    Ok(())
}

/// Replace each tile with its per-channel mean.
///
/// Tiles follow the same block partition as the strip applier, remainder
/// tiles included.
pub fn level(image: &mut ImageData, block_width: usize, block_height: usize) -> NlossResult<()> {
    if !image.is_loaded() {
        return Err(NlossError::NoBufferLoaded);
    }
    let tiles = create_tiles(image.dimensions(), block_width, block_height)?;
    let width = image.width();
    let pixels = image.pixels_mut()?;

    for tile in tiles {
        let indices = || {
            tile.rows
                .range()
                .flat_map(move |row| tile.cols.range().map(move |col| row * width + col))
        };

        let mut sums = [Sample::zero(); CHANNELS];
        for i in indices() {
            for (sum, s) in sums.iter_mut().zip(pixels[i].iter()) {
                *sum += *s;
            }
        }
        let area = tile.area() as f64;
        let mean = sums.map(|sum| sum / area);

        for i in indices() {
            pixels[i] = mean;
        }
    }
    Ok(())
}
