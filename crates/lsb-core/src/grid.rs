//! Interleaved 8-bit pixel grid.
//!
//! [`PixelGrid`] is the in-memory form every other component works on: a
//! `height x width x channels` array of `u8` samples stored row-major with
//! channels interleaved (`[R, G, B, (A), R, G, B, (A), ...]`). Image files are
//! decoded into it and encoded from it by the caller.

use crate::error::StegoError;
use std::fmt;

/// Dimensions of a [`PixelGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl Shape {
    /// Total number of samples (`height * width * channels`).
    #[inline]
    pub fn len(&self) -> usize {
        self.height * self.width * self.channels
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}

/// A rectangular grid of pixels with a fixed number of 8-bit channels.
///
/// # Example
///
/// ```
/// use lsb_core::PixelGrid;
///
/// // 2x1 RGB image: one red pixel, one blue pixel
/// let grid = PixelGrid::new(vec![255, 0, 0, 0, 0, 255], 2, 1, 3).unwrap();
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 1);
/// assert_eq!(grid.pixel(1, 0), &[0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Samples, row-major, channels interleaved.
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelGrid {
    /// Wrap a sample buffer.
    ///
    /// Fails with [`StegoError::InvalidGrid`] when `data.len()` is not
    /// `width * height * channels`, when that product overflows `usize`
    /// (reported as `expected: usize::MAX`), or when `channels` is zero.
    pub fn new(
        data: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, StegoError> {
        let expected = sample_count(width, height, channels);
        if channels == 0 || expected != Some(data.len()) {
            return Err(StegoError::InvalidGrid {
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// A grid with every sample set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is zero or `width * height * channels`
    /// overflows `usize`.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Self {
        assert!(channels > 0, "a pixel grid needs at least one channel");
        let len = sample_count(width, height, channels)
            .unwrap_or_else(|| panic!("{width}x{height}x{channels} grid overflows usize"));
        Self {
            data: vec![value; len],
            width,
            height,
            channels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape {
            height: self.height,
            width: self.width,
            channels: self.channels,
        }
    }

    /// All samples as a flat slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes in one row of pixels.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width * self.channels
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.row_stride();
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Sample `c` of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<u8> {
        if x >= self.width || y >= self.height || c >= self.channels {
            return None;
        }
        Some(self.data[(y * self.width + x) * self.channels + c])
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn sample_count(width: usize, height: usize, channels: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields() {
        let grid = PixelGrid::new((0..24).collect(), 4, 2, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.channels(), 3);
        assert_eq!(grid.as_bytes().len(), 24);
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = PixelGrid::new(vec![0; 10], 2, 2, 3);
        assert_eq!(
            result,
            Err(StegoError::InvalidGrid {
                expected: 12,
                actual: 10
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_channels() {
        assert!(PixelGrid::new(Vec::new(), 2, 2, 0).is_err());
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        let result = PixelGrid::new(Vec::new(), usize::MAX / 2 + 1, 2, 1);
        assert_eq!(
            result,
            Err(StegoError::InvalidGrid {
                expected: usize::MAX,
                actual: 0
            })
        );
        assert!(PixelGrid::new(Vec::new(), usize::MAX / 4, usize::MAX / 4, 3).is_err());
    }

    #[test]
    #[should_panic(expected = "at least one channel")]
    fn test_filled_rejects_zero_channels() {
        let _ = PixelGrid::filled(2, 2, 0, 0);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_filled_rejects_overflowing_dimensions() {
        let _ = PixelGrid::filled(usize::MAX, 2, 3, 0);
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let grid = PixelGrid::new(Vec::new(), 0, 5, 3).unwrap();
        assert!(grid.shape().is_empty());
    }

    #[test]
    fn test_pixel_and_row_layout() {
        // 2x2 RGBA, sample value = index
        let grid = PixelGrid::new((0..16).collect(), 2, 2, 4).unwrap();
        assert_eq!(grid.pixel(0, 0), &[0, 1, 2, 3]);
        assert_eq!(grid.pixel(1, 1), &[12, 13, 14, 15]);
        assert_eq!(grid.row(1), &[8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(grid.get(1, 0, 2), Some(6));
        assert_eq!(grid.get(2, 0, 0), None);
        assert_eq!(grid.get(0, 0, 4), None);
    }

    #[test]
    fn test_shape_display() {
        let grid = PixelGrid::filled(5, 3, 4, 0);
        assert_eq!(grid.shape().to_string(), "3x5x4");
        assert_eq!(grid.shape().len(), 60);
    }
}
