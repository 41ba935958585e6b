//! Per-command configuration

use nloss_core::consts::{DEFAULT_SLOT, SLOT_COUNT};
use nloss_core::{Dimensions, NlossError, NlossResult};
use nloss_transform::Axis;

/// Parameters of a single command invocation.
///
/// Values are stored as given by the caller and validated when a command
/// resolves them, so one bad flag is reported as `InvalidParameter` rather
/// than silently adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    /// Image slot the command operates on
    pub slot: i64,
    /// Block width for vertical passes and tiles (default: image width)
    pub block_width: Option<i64>,
    /// Block height for horizontal passes and tiles (default: image height)
    pub block_height: Option<i64>,
    pub axis: Axis,
    /// Step or threshold for quantize and cutoff
    pub size: Option<i64>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT as i64,
            block_width: None,
            block_height: None,
            axis: Axis::default(),
            size: None,
        }
    }
}

impl CommandConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(mut self, slot: i64) -> Self {
        self.slot = slot;
        self
    }

    pub fn block_width(mut self, block_width: i64) -> Self {
        self.block_width = Some(block_width);
        self
    }

    pub fn block_height(mut self, block_height: i64) -> Self {
        self.block_height = Some(block_height);
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// The slot as a bank index
    pub fn slot_index(&self) -> NlossResult<usize> {
        usize::try_from(self.slot)
            .ok()
            .filter(|&slot| slot < SLOT_COUNT)
            .ok_or_else(|| {
                NlossError::InvalidParameter(format!(
                    "slot {} out of range (0 - {})",
                    self.slot,
                    SLOT_COUNT - 1
                ))
            })
    }

    /// Block width and height, defaulting to the full image extent
    pub fn resolve_blocks(&self, dims: Dimensions) -> NlossResult<(usize, usize)> {
        let width = positive_or(self.block_width, dims.width, "block width")?;
        let height = positive_or(self.block_height, dims.height, "block height")?;
        Ok((width, height))
    }

    /// The mandatory positive size parameter
    pub fn required_size(&self) -> NlossResult<f64> {
        match self.size {
            None => Err(NlossError::invalid_parameter("size not given")),
            Some(size) if size <= 0 => Err(NlossError::InvalidParameter(format!(
                "size must be positive, got {}",
                size
            ))),
            Some(size) => Ok(size as f64),
        }
    }
}

fn positive_or(value: Option<i64>, default: usize, what: &str) -> NlossResult<usize> {
    let resolved = match value {
        Some(v) if v <= 0 => {
            return Err(NlossError::InvalidParameter(format!(
                "{} must be positive, got {}",
                what, v
            )))
        }
        Some(v) => usize::try_from(v)
            .map_err(|_| NlossError::InvalidParameter(format!("{} too large: {}", what, v)))?,
        None => default,
    };
    if resolved == 0 {
        return Err(NlossError::InvalidParameter(format!(
            "{} must be positive for an empty image",
            what
        )));
    }
    Ok(resolved)
}
