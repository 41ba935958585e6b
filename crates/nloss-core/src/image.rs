//! Image data structures

use crate::{Dimensions, NlossError, NlossResult, Pixel, Sample, SampleValue, ZERO_PIXEL};

/// A complex-valued RGB image held in memory.
///
/// Pixels are stored row-major, `[row][col]`, three samples per position.
/// The buffer is "loaded" exactly when a pixel array is allocated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageData {
    dimensions: Dimensions,
    pixels: Option<Vec<Pixel>>,
}

impl ImageData {
    /// An empty, unloaded buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// A loaded buffer of the given size with every sample at zero
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        let mut image = Self::new();
        image.allocate(width, height);
        image
    }

    /// Builds a loaded buffer from 8-bit RGB triples in row-major order.
    pub fn from_rgb8(width: usize, height: usize, data: &[[u8; 3]]) -> NlossResult<Self> {
        let dimensions = Dimensions::new(width, height);
        if data.len() != dimensions.pixel_count() {
            return Err(NlossError::InvalidParameter(format!(
                "expected {} pixels for {}x{}, got {}",
                dimensions.pixel_count(),
                width,
                height,
                data.len()
            )));
        }

        let pixels = data
            .iter()
            .map(|rgb| [rgb[0].to_sample(), rgb[1].to_sample(), rgb[2].to_sample()])
            .collect();

        Ok(Self {
            dimensions,
            pixels: Some(pixels),
        })
    }

    /// Converts every pixel to 8-bit RGB, clamping and flooring real parts.
    pub fn to_rgb8(&self) -> NlossResult<Vec<[u8; 3]>> {
        let pixels = self.pixels()?;
        Ok(pixels
            .iter()
            .map(|p| {
                [
                    u8::from_sample(p[0]),
                    u8::from_sample(p[1]),
                    u8::from_sample(p[2]),
                ]
            })
            .collect())
    }

    /// Allocates a zeroed pixel array, replacing any previous contents
    pub fn allocate(&mut self, width: usize, height: usize) {
        self.dimensions = Dimensions::new(width, height);
        self.pixels = Some(vec![ZERO_PIXEL; self.dimensions.pixel_count()]);
    }

    /// Releases the pixel array and resets the dimensions
    pub fn clear(&mut self) {
        self.dimensions = Dimensions::default();
        self.pixels = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.pixels.is_some()
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> NlossResult<&[Pixel]> {
        self.pixels.as_deref().ok_or(NlossError::NoBufferLoaded)
    }

    pub fn pixels_mut(&mut self) -> NlossResult<&mut [Pixel]> {
        self.pixels.as_deref_mut().ok_or(NlossError::NoBufferLoaded)
    }

    /// One row of pixels
    pub fn row(&self, row: usize) -> NlossResult<&[Pixel]> {
        let width = self.width();
        let pixels = self.pixels()?;
        self.check_row(row)?;
        Ok(&pixels[row * width..(row + 1) * width])
    }

    pub fn row_mut(&mut self, row: usize) -> NlossResult<&mut [Pixel]> {
        self.check_row(row)?;
        let width = self.width();
        let pixels = self.pixels_mut()?;
        Ok(&mut pixels[row * width..(row + 1) * width])
    }

    /// Sample at `(row, col)` on `channel`
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> NlossResult<Sample> {
        let index = self.index_of(row, col)?;
        let pixels = self.pixels()?;
        pixels[index]
            .get(channel)
            .copied()
            .ok_or_else(|| NlossError::InvalidParameter(format!("no channel {}", channel)))
    }

    pub fn set_sample(
        &mut self,
        row: usize,
        col: usize,
        channel: usize,
        value: Sample,
    ) -> NlossResult<()> {
        let index = self.index_of(row, col)?;
        let pixels = self.pixels_mut()?;
        let slot = pixels[index]
            .get_mut(channel)
            .ok_or_else(|| NlossError::InvalidParameter(format!("no channel {}", channel)))?;
        *slot = value;
        Ok(())
    }

    /// Applies `f` to every pixel in place
    pub fn map_pixels<F>(&mut self, mut f: F) -> NlossResult<()>
    where
        F: FnMut(&mut Pixel),
    {
        self.pixels_mut()?.iter_mut().for_each(|p| f(p));
        Ok(())
    }

    /// Applies `f` to every sample of every channel in place
    pub fn map_samples<F>(&mut self, mut f: F) -> NlossResult<()>
    where
        F: FnMut(Sample) -> Sample,
    {
        self.map_pixels(|p| {
            for s in p.iter_mut() {
                *s = f(*s);
            }
        })
    }

    fn check_row(&self, row: usize) -> NlossResult<()> {
        if row >= self.height() {
            return Err(NlossError::InvalidParameter(format!(
                "row {} out of range for height {}",
                row,
                self.height()
            )));
        }
        Ok(())
    }

    fn index_of(&self, row: usize, col: usize) -> NlossResult<usize> {
        self.check_row(row)?;
        if col >= self.width() {
            return Err(NlossError::InvalidParameter(format!(
                "column {} out of range for width {}",
                col,
                self.width()
            )));
        }
        Ok(row * self.width() + col)
    }
}
