//! Transform operations for nLoss
//!
//! This crate implements the one-dimensional transform engine (Fourier,
//! cosine, sine and Walsh–Hadamard pairs), the block partitioning used to
//! localize transforms, the strip applier that runs a transform over an
//! image, and the simple per-pixel operations.

pub mod cosine;
pub mod fourier;
pub mod kind;
pub mod partition;
pub mod pixel;
pub mod sine;
pub mod strip;
pub mod walsh;

#[cfg(test)]
mod testing;

pub use cosine::*;
pub use fourier::*;
pub use kind::*;
pub use partition::*;
pub use pixel::*;
pub use sine::*;
pub use strip::*;
pub use walsh::*;
