//! The sixteen image slots of a session
//!
//! Every command names one slot. Loading replaces a slot's contents, and a
//! failed load leaves that slot cleared. Operations that fail leave their
//! slot unchanged and never touch the other slots.

use std::path::Path;

use nloss_bmp::{BmpLayout, RgbImage};
use nloss_core::consts::SLOT_COUNT;
use nloss_core::{Dimensions, ImageData, NlossError, NlossResult};
use nloss_transform::{
    absolute, apply_strips, cutoff, fit, flip, grayscale, invert, level, quantize,
};
use tracing::{debug, info};

use crate::{CommandConfig, ImageInfo, Operation};

/// Fixed bank of image buffers owned by one session
#[derive(Debug, Clone)]
pub struct ImageBank {
    slots: [ImageData; SLOT_COUNT],
}

impl Default for ImageBank {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBank {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| ImageData::new()),
        }
    }

    pub fn slot(&self, index: usize) -> NlossResult<&ImageData> {
        self.slots.get(index).ok_or_else(|| slot_out_of_range(index))
    }

    pub fn slot_mut(&mut self, index: usize) -> NlossResult<&mut ImageData> {
        self.slots
            .get_mut(index)
            .ok_or_else(|| slot_out_of_range(index))
    }

    /// Number of slots currently holding an image
    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_loaded()).count()
    }

    /// Decode an in-memory BMP into a slot
    pub fn load_bytes(&mut self, index: usize, bytes: &[u8]) -> NlossResult<Dimensions> {
        let slot = self.slot_mut(index)?;
        slot.clear();
        let image = nloss_bmp::decode(bytes)?.into_image_data()?;
        let dimensions = image.dimensions();
        *slot = image;
        Ok(dimensions)
    }

    /// Read and decode a BMP file into a slot
    pub fn load_file<P: AsRef<Path>>(&mut self, index: usize, path: P) -> NlossResult<Dimensions> {
        let path = path.as_ref();
        let slot = self.slot_mut(index)?;
        slot.clear();
        let image = nloss_bmp::decode_file(path)?.into_image_data()?;
        let dimensions = image.dimensions();
        *slot = image;
        info!(
            slot = index,
            path = %path.display(),
            width = dimensions.width,
            height = dimensions.height,
            "loaded image"
        );
        Ok(dimensions)
    }

    /// Encode a slot's real parts as a BMP
    pub fn encode_slot(&self, index: usize) -> NlossResult<Vec<u8>> {
        let raster = RgbImage::from_image_data(self.slot(index)?)?;
        nloss_bmp::encode(&raster)
    }

    pub fn save_file<P: AsRef<Path>>(&self, index: usize, path: P) -> NlossResult<()> {
        let path = path.as_ref();
        let raster = RgbImage::from_image_data(self.slot(index)?)?;
        nloss_bmp::encode_file(&raster, path)?;
        info!(
            slot = index,
            path = %path.display(),
            bytes = BmpLayout::new(raster.width, raster.height).file_size,
            "saved image"
        );
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> NlossResult<()> {
        self.slot_mut(index)?.clear();
        Ok(())
    }

    pub fn info(&self, index: usize) -> NlossResult<ImageInfo> {
        Ok(ImageInfo::from_image(self.slot(index)?))
    }

    /// Run `op` on the slot named by `config`, returning the success message
    pub fn apply(&mut self, op: Operation, config: &CommandConfig) -> NlossResult<String> {
        let index = config.slot_index()?;
        let image = self.slot_mut(index)?;
        if !image.is_loaded() {
            return Err(NlossError::NoBufferLoaded);
        }
        debug!(slot = index, %op, "applying operation");

        match op {
            Operation::Transform(kind) => {
                let (block_width, block_height) = config.resolve_blocks(image.dimensions())?;
                apply_strips(image, config.axis, block_width, block_height, &kind)?;
            }
            Operation::Invert => invert(image)?,
            Operation::Grayscale => grayscale(image)?,
            Operation::Absolute => absolute(image)?,
            Operation::Fit => fit(image)?,
            Operation::Quantize => quantize(image, config.required_size()?)?,
            Operation::Cutoff => cutoff(image, config.required_size()?)?,
            Operation::Flip(direction) => flip(image, direction)?,
            Operation::Level => {
                let (block_width, block_height) = config.resolve_blocks(image.dimensions())?;
                level(image, block_width, block_height)?;
            }
        }
        Ok(op.success_message(config.axis))
    }
}

fn slot_out_of_range(index: usize) -> NlossError {
    NlossError::InvalidParameter(format!(
        "slot {} out of range (0 - {})",
        index,
        SLOT_COUNT - 1
    ))
}
