//! Commands that modify a loaded slot in place

use std::fmt;

use nloss_transform::{Axis, FlipDirection, TransformKind};

/// An in-place operation on one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Strip transform along the configured axis
    Transform(TransformKind),
    Invert,
    Grayscale,
    Absolute,
    Fit,
    /// Requires a size (the step)
    Quantize,
    /// Requires a size (the threshold)
    Cutoff,
    Flip(FlipDirection),
    /// Tile averaging over the configured block sizes
    Level,
}

impl Operation {
    /// Message reported after the operation succeeds
    pub fn success_message(&self, axis: Axis) -> String {
        match self {
            Operation::Transform(_) => match axis {
                Axis::Horizontal => "Image transformed along horizontal axis".to_string(),
                Axis::Vertical => "Image transformed along vertical axis".to_string(),
                Axis::Both => "Image transformed along both axes".to_string(),
            },
            Operation::Invert => "Image colors inverted".to_string(),
            Operation::Grayscale => "Image converted to grayscale".to_string(),
            Operation::Absolute => "Taken absolute value".to_string(),
            Operation::Fit => "Image fitted to 8-bit range".to_string(),
            Operation::Quantize => "Quantized".to_string(),
            Operation::Cutoff => "Cutoff applied".to_string(),
            Operation::Flip(direction) => format!("Image flipped {}", direction),
            Operation::Level => "Image levelled".to_string(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Transform(kind) => write!(f, "{}", kind),
            Operation::Invert => f.write_str("invert"),
            Operation::Grayscale => f.write_str("grayscale"),
            Operation::Absolute => f.write_str("abs"),
            Operation::Fit => f.write_str("fit"),
            Operation::Quantize => f.write_str("quant"),
            Operation::Cutoff => f.write_str("cutoff"),
            Operation::Flip(_) => f.write_str("flip"),
            Operation::Level => f.write_str("level"),
        }
    }
}
