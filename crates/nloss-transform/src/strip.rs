//! Tiled strip application of a one-dimensional transform
//!
//! A horizontal pass walks every column and transforms the samples of each
//! vertical block (blocks of `block_height` rows). A vertical pass walks
//! every row and transforms each horizontal block (blocks of `block_width`
//! columns). `Axis::Both` runs the horizontal pass over the whole image and
//! then the vertical pass over its result; it is not a joint 2D transform.
//!
//! The image is only modified once every strip has been transformed, so a
//! failing call leaves it untouched.

use std::fmt;
use std::str::FromStr;

use nloss_core::consts::CHANNELS;
use nloss_core::{Dimensions, ImageData, NlossError, NlossResult, Pixel, Sample};
use tracing::{debug, trace};

use crate::{Block, BlockPartition, StripTransform};

/// Direction along which strips are taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Per column, over blocks of rows
    #[default]
    Horizontal,
    /// Per row, over blocks of columns
    Vertical,
    /// Horizontal pass, then vertical pass
    Both,
}

impl Axis {
    fn passes(&self) -> &'static [Pass] {
        match self {
            Axis::Horizontal => &[Pass::Columns],
            Axis::Vertical => &[Pass::Rows],
            Axis::Both => &[Pass::Columns, Pass::Rows],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
            Axis::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for Axis {
    type Err = NlossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "horizontal" => Ok(Axis::Horizontal),
            "v" | "vertical" => Ok(Axis::Vertical),
            "d" | "both" => Ok(Axis::Both),
            other => Err(NlossError::InvalidParameter(format!(
                "invalid axis '{}', use 'h', 'v' or 'd'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Pass {
    Columns,
    Rows,
}

/// Copy one channel of a block out of the pixel buffer
fn extract_strip(
    pixels: &[Pixel],
    indices: impl Iterator<Item = usize>,
    channel: usize,
) -> Vec<Sample> {
    indices.map(|i| pixels[i][channel]).collect()
}

/// Write a transformed strip back at the positions it was read from
fn insert_strip(
    pixels: &mut [Pixel],
    indices: impl Iterator<Item = usize>,
    channel: usize,
    strip: Vec<Sample>,
) {
    for (i, value) in indices.zip(strip) {
        pixels[i][channel] = value;
    }
}

fn transform_block<T, I>(
    pixels: &mut [Pixel],
    block: Block,
    indices: I,
    transform: &T,
) -> NlossResult<()>
where
    T: StripTransform + ?Sized,
    I: Iterator<Item = usize> + Clone,
{
    for channel in 0..CHANNELS {
        let strip = extract_strip(pixels, indices.clone(), channel);
        let transformed = transform.apply(&strip);
        if transformed.len() != block.len {
            return Err(NlossError::InvalidParameter(format!(
                "transform returned {} samples for a strip of {}",
                transformed.len(),
                block.len
            )));
        }
        insert_strip(pixels, indices.clone(), channel, transformed);
    }
    Ok(())
}

fn run_pass<T>(
    pixels: &mut [Pixel],
    dims: Dimensions,
    pass: Pass,
    block_width: usize,
    block_height: usize,
    transform: &T,
) -> NlossResult<()>
where
    T: StripTransform + ?Sized,
{
    let width = dims.width;
    match pass {
        Pass::Columns => {
            let blocks: Vec<Block> = BlockPartition::new(dims.height, block_height)?.collect();
            trace!(columns = width, blocks = blocks.len(), "column pass");
            for col in 0..width {
                for &block in &blocks {
                    let indices = block.range().map(move |row| row * width + col);
                    transform_block(pixels, block, indices, transform)?;
                }
            }
        }
        Pass::Rows => {
            let blocks: Vec<Block> = BlockPartition::new(width, block_width)?.collect();
            trace!(rows = dims.height, blocks = blocks.len(), "row pass");
            for row in 0..dims.height {
                for &block in &blocks {
                    let indices = block.range().map(move |col| row * width + col);
                    transform_block(pixels, block, indices, transform)?;
                }
            }
        }
    }
    Ok(())
}

/// Apply `transform` to every channel of `image` along `axis`.
///
/// `block_width` partitions rows for vertical passes and `block_height`
/// partitions columns for horizontal passes; both must be positive.
pub fn apply_strips<T>(
    image: &mut ImageData,
    axis: Axis,
    block_width: usize,
    block_height: usize,
    transform: &T,
) -> NlossResult<()>
where
    T: StripTransform + ?Sized,
{
    if !image.is_loaded() {
        return Err(NlossError::NoBufferLoaded);
    }
    if block_width == 0 {
        return Err(NlossError::invalid_parameter("block width must be positive"));
    }
    if block_height == 0 {
        return Err(NlossError::invalid_parameter("block height must be positive"));
    }

    let dims = image.dimensions();
    debug!(
        %axis,
        width = dims.width,
        height = dims.height,
        block_width,
        block_height,
        "applying strip transform"
    );

    let mut working = image.pixels()?.to_vec();
    for &pass in axis.passes() {
        run_pass(&mut working, dims, pass, block_width, block_height, transform)?;
    }

    image.pixels_mut()?.copy_from_slice(&working);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformKind;

    fn constant_image(width: usize, height: usize, value: f64) -> ImageData {
        let mut image = ImageData::with_dimensions(width, height);
        image
            .map_samples(|_| Sample::new(value, 0.0))
            .unwrap();
        image
    }

    fn gradient_image(width: usize, height: usize) -> ImageData {
        let data: Vec<[u8; 3]> = (0..width * height)
            .map(|i| {
                let v = (i * 29 % 251) as u8;
                [v, v.wrapping_mul(3), 255 - v]
            })
            .collect();
        ImageData::from_rgb8(width, height, &data).unwrap()
    }

    #[test]
    fn test_axis_tokens() {
        assert_eq!("h".parse::<Axis>().unwrap(), Axis::Horizontal);
        assert_eq!("vertical".parse::<Axis>().unwrap(), Axis::Vertical);
        assert_eq!("d".parse::<Axis>().unwrap(), Axis::Both);
        assert!(matches!("x".parse::<Axis>(), Err(NlossError::InvalidParameter(_))));
    }

    #[test]
    fn test_fft_horizontal_constant_image() {
        let mut image = constant_image(4, 4, 128.0);
        apply_strips(&mut image, Axis::Horizontal, 4, 4, &TransformKind::Fft).unwrap();

        for col in 0..4 {
            for channel in 0..CHANNELS {
                let dc = image.sample(0, col, channel).unwrap();
                assert!((dc - Sample::new(512.0, 0.0)).norm() < 1e-9);
                for row in 1..4 {
                    assert!(image.sample(row, col, channel).unwrap().norm() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_both_equals_horizontal_then_vertical() {
        let original = gradient_image(7, 5);

        let mut sequential = original.clone();
        apply_strips(&mut sequential, Axis::Horizontal, 3, 2, &TransformKind::Dct2).unwrap();
        apply_strips(&mut sequential, Axis::Vertical, 3, 2, &TransformKind::Dct2).unwrap();

        let mut both = original;
        apply_strips(&mut both, Axis::Both, 3, 2, &TransformKind::Dct2).unwrap();

        assert_eq!(sequential, both);
    }

    #[test]
    fn test_blocks_are_transformed_independently() {
        // 1 column, 5 rows, blocks of 2: [1,1 | 1,1 | 1]
        let mut image = constant_image(1, 5, 1.0);
        apply_strips(&mut image, Axis::Horizontal, 1, 2, &TransformKind::Dft).unwrap();
        let column: Vec<f64> = (0..5).map(|r| image.sample(r, 0, 0).unwrap().re).collect();
        let expected = [2.0, 0.0, 2.0, 0.0, 1.0];
        for (got, want) in column.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{:?}", column);
        }
    }

    #[test]
    fn test_vertical_pass_uses_block_width() {
        let mut image = constant_image(5, 1, 2.0);
        apply_strips(&mut image, Axis::Vertical, 3, 1, &TransformKind::Wht).unwrap();
        let row: Vec<f64> = (0..5).map(|c| image.sample(0, c, 1).unwrap().re).collect();
        // [2,2,2] padded to 4 -> [6,2,2,-2] truncated; [2,2] -> [4,0]
        let expected = [6.0, 2.0, 2.0, 4.0, 0.0];
        for (got, want) in row.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{:?}", row);
        }
    }

    #[test]
    fn test_roundtrip_with_remainders() {
        let original = gradient_image(6, 7);
        let mut image = original.clone();
        apply_strips(&mut image, Axis::Both, 4, 3, &TransformKind::Dft).unwrap();
        apply_strips(&mut image, Axis::Both, 4, 3, &TransformKind::Idft).unwrap();

        let restored = image.pixels().unwrap();
        for (got, want) in restored.iter().zip(original.pixels().unwrap()) {
            for channel in 0..CHANNELS {
                assert!((got[channel] - want[channel]).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn test_failures_leave_image_untouched() {
        let original = gradient_image(4, 4);

        let mut image = original.clone();
        assert!(matches!(
            apply_strips(&mut image, Axis::Both, 0, 4, &TransformKind::Fft),
            Err(NlossError::InvalidParameter(_))
        ));
        assert!(matches!(
            apply_strips(&mut image, Axis::Both, 4, 0, &TransformKind::Fft),
            Err(NlossError::InvalidParameter(_))
        ));
        assert_eq!(image, original);

        // A transform that changes the strip length fails after the first pass
        let shrink = |s: &[Sample]| s[..s.len() - 1].to_vec();
        let doubling = |s: &[Sample]| s.iter().map(|x| *x * 2.0).collect::<Vec<_>>();
        apply_strips(&mut image, Axis::Horizontal, 4, 4, &doubling).unwrap();
        let doubled = image.clone();
        assert!(apply_strips(&mut image, Axis::Both, 4, 4, &shrink).is_err());
        assert_eq!(image, doubled);
    }

    #[test]
    fn test_unloaded_image_rejected() {
        let mut image = ImageData::new();
        assert!(matches!(
            apply_strips(&mut image, Axis::Horizontal, 1, 1, &TransformKind::Fft),
            Err(NlossError::NoBufferLoaded)
        ));
    }
}
