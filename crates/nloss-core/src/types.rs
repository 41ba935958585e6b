//! Core types for nLoss

use num_complex::Complex64;
use num_traits::NumCast;

use crate::consts::{CHANNELS, MAX_INTENSITY};

/// A single complex-valued color sample.
///
/// The real part carries intensity in the spatial domain; after a transform
/// both parts carry coefficient data.
pub type Sample = Complex64;

/// One pixel position: a sample per channel in R, G, B order
pub type Pixel = [Sample; CHANNELS];

/// A pixel with every channel at zero
pub const ZERO_PIXEL: Pixel = [Complex64::new(0.0, 0.0); CHANNELS];

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Conversion between stored channel values and complex samples
pub trait SampleValue: Copy + NumCast {
    fn to_sample(self) -> Sample;
    fn from_sample(sample: Sample) -> Self;
}

impl SampleValue for u8 {
    fn to_sample(self) -> Sample {
        Sample::new(self as f64, 0.0)
    }

    /// Clamps the real part to `[0, 255]` and floors it; the imaginary part is dropped.
    fn from_sample(sample: Sample) -> Self {
        let re = sample.re;
        if re.is_nan() || re < 0.0 {
            0
        } else if re > MAX_INTENSITY {
            u8::MAX
        } else {
            re.floor() as u8
        }
    }
}
