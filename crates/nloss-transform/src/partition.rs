//! Block partitioning of an image extent
//!
//! An extent `E` split with block size `B` yields `E / B` full blocks in
//! order, then one remainder block of `E % B` positions when that is
//! nonzero. Blocks are contiguous, disjoint and cover `[0, E)` exactly.

use std::ops::Range;

use nloss_core::{Dimensions, NlossError, NlossResult};

/// A contiguous run of positions along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub len: usize,
}

impl Block {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Calculate the number of blocks needed for an extent
pub fn num_blocks(extent: usize, block_size: usize) -> usize {
    extent.div_ceil(block_size)
}

/// Iterator over the blocks of one extent
#[derive(Debug, Clone)]
pub struct BlockPartition {
    extent: usize,
    block_size: usize,
    next_start: usize,
}

impl BlockPartition {
    /// Partition `[0, extent)` into blocks of `block_size`
    pub fn new(extent: usize, block_size: usize) -> NlossResult<Self> {
        if block_size == 0 {
            return Err(NlossError::invalid_parameter("block size must be positive"));
        }
        Ok(Self {
            extent,
            block_size,
            next_start: 0,
        })
    }
}

impl Iterator for BlockPartition {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.next_start >= self.extent {
            return None;
        }
        let start = self.next_start;
        let len = self.block_size.min(self.extent - start);
        self.next_start += len;
        Some(Block { start, len })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = num_blocks(self.extent - self.next_start, self.block_size);
        (left, Some(left))
    }
}

impl ExactSizeIterator for BlockPartition {}

/// A rectangular tile: one block along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub cols: Block,
    pub rows: Block,
}

impl Tile {
    pub fn area(&self) -> usize {
        self.cols.len * self.rows.len
    }
}

/// Divide an image into tiles, row of tiles by row of tiles
pub fn create_tiles(
    dims: Dimensions,
    block_width: usize,
    block_height: usize,
) -> NlossResult<Vec<Tile>> {
    let col_blocks: Vec<Block> = BlockPartition::new(dims.width, block_width)?.collect();
    let row_blocks = BlockPartition::new(dims.height, block_height)?;

    let mut tiles = Vec::with_capacity(col_blocks.len() * row_blocks.len());
    for rows in row_blocks {
        for &cols in &col_blocks {
            tiles.push(Tile { cols, rows });
        }
    }
    Ok(tiles)
}
