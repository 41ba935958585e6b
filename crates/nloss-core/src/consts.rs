//! Constants used throughout nLoss

/// Number of color channels held per pixel (R, G, B)
pub const CHANNELS: usize = 3;

/// Number of addressable image slots in a bank
pub const SLOT_COUNT: usize = 16;

/// Slot used when a command does not name one
pub const DEFAULT_SLOT: usize = 0;

/// Largest intensity representable in a saved 8-bit channel
pub const MAX_INTENSITY: f64 = 255.0;

/// Luma weights used by the grayscale conversion
pub const LUMA_RED: f64 = 0.299;
pub const LUMA_GREEN: f64 = 0.587;
pub const LUMA_BLUE: f64 = 0.114;
