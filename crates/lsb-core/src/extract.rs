//! Extractor: reads channel LSBs back into text.
//!
//! Reads every carrier sample in the embedder's scan order, zero-pads the
//! stream to a whole number of bytes, decodes it, and drops the trailing null
//! characters that padding produces. There is no length header, so where the
//! message ends is defined entirely by that sentinel rule.

use crate::bits;
use crate::capacity::{self, CARRIER_CHANNELS};
use crate::error::StegoError;
use crate::grid::PixelGrid;

/// Recover the message hidden in `grid`.
///
/// # Errors
/// [`StegoError::UnsupportedChannels`] if the grid has fewer than 3 channels.
pub fn extract(grid: &PixelGrid) -> Result<String, StegoError> {
    let mut stream = extract_bits(grid)?;
    stream.resize(stream.len().div_ceil(bits::BITS_PER_CHAR) * bits::BITS_PER_CHAR, 0);
    Ok(bits::decode(&stream))
}

/// Raw LSB stream of `grid`, exactly `capacity(grid)` bits long.
pub fn extract_bits(grid: &PixelGrid) -> Result<Vec<u8>, StegoError> {
    capacity::check_channels(grid)?;
    let stride = grid.row_stride();
    if stride == 0 {
        return Ok(Vec::new());
    }
    Ok(read_rows(grid.as_bytes(), stride, grid.channels()))
}

#[cfg(not(feature = "parallel"))]
fn read_rows(data: &[u8], stride: usize, channels: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / channels * CARRIER_CHANNELS);
    for row in data.chunks(stride) {
        read_row(row, channels, &mut out);
    }
    out
}

#[cfg(feature = "parallel")]
fn read_rows(data: &[u8], stride: usize, channels: usize) -> Vec<u8> {
    use rayon::prelude::*;

    // collect() keeps row order
    let rows: Vec<Vec<u8>> = data
        .par_chunks(stride)
        .map(|row| {
            let mut bits = Vec::with_capacity(stride / channels * CARRIER_CHANNELS);
            read_row(row, channels, &mut bits);
            bits
        })
        .collect();
    rows.concat()
}

#[inline]
fn read_row(row: &[u8], channels: usize, out: &mut Vec<u8>) {
    for pixel in row.chunks_exact(channels) {
        out.extend(pixel[..CARRIER_CHANNELS].iter().map(|s| s & 1));
    }
}
