//! Core types and utilities for nLoss
//!
//! This crate provides the fundamental data structures shared by the rest of
//! the workspace: the complex sample type, the three-channel image buffer,
//! and the error taxonomy.

pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use error::{NlossError, NlossResult};
pub use image::*;
pub use types::*;
