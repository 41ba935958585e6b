//! # nLoss
//!
//! Loads 24-bit BMP images into complex-valued buffers, applies blockwise
//! one-dimensional transforms and pixel operations to them, and saves the
//! real parts back as bytes.
//!
//! ```no_run
//! use nloss::{CommandConfig, ImageBank, Operation, TransformKind};
//!
//! let mut bank = ImageBank::new();
//! bank.load_file(0, "input.bmp").unwrap();
//!
//! let config = CommandConfig::new().block_width(8).block_height(8);
//! bank.apply(Operation::Transform(TransformKind::Dct2), &config).unwrap();
//! bank.apply(Operation::Transform(TransformKind::Idct2), &config).unwrap();
//!
//! bank.save_file(0, "output.bmp").unwrap();
//! ```

pub mod bank;
pub mod config;
pub mod info;
pub mod ops;

pub use bank::ImageBank;
pub use config::CommandConfig;
pub use info::ImageInfo;
pub use ops::Operation;

pub use nloss_core::{Dimensions, ImageData, NlossError, NlossResult, Sample};
pub use nloss_transform::{Axis, FlipDirection, TransformKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
