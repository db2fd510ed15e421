//! Embedder: writes a bitstream into channel LSBs.
//!
//! Scan order is row-major over pixels, then channels 0, 1, 2 within each
//! pixel. [`crate::extract`] reads in exactly the same order. Every carrier
//! sample is written: bits past the end of the message are zero, which reads
//! back as the null sentinel.

use crate::bits;
use crate::capacity::{self, CARRIER_CHANNELS};
use crate::error::StegoError;
use crate::grid::PixelGrid;

/// Hide `message` in a copy of `grid`.
///
/// The message is encoded and checked against the grid's capacity before
/// anything is written, so on error no output exists at all.
///
/// # Errors
/// - [`StegoError::Encoding`] if a character is outside the single-byte range.
/// - [`StegoError::UnsupportedChannels`] if the grid has fewer than 3 channels.
/// - [`StegoError::Capacity`] if the message does not fit.
///
/// # Example
///
/// ```
/// use lsb_core::{embed, extract, PixelGrid};
///
/// let cover = PixelGrid::filled(4, 4, 3, 200);
/// let stego = embed(&cover, "Hi").unwrap();
/// assert_eq!(extract(&stego).unwrap(), "Hi");
/// ```
pub fn embed(grid: &PixelGrid, message: &str) -> Result<PixelGrid, StegoError> {
    let bits = bits::encode(message)?;
    embed_bits(grid, &bits)
}

/// Write a prepared bitstream into a copy of `grid`.
///
/// Elements of `bits` are treated as 0 when zero and 1 otherwise.
pub fn embed_bits(grid: &PixelGrid, bits: &[u8]) -> Result<PixelGrid, StegoError> {
    capacity::validate(grid, bits.len())?;

    let mut out = grid.clone();
    let width = out.width();
    let channels = out.channels();
    write_rows(out.data_mut(), width, channels, bits);
    Ok(out)
}

#[cfg(not(feature = "parallel"))]
fn write_rows(data: &mut [u8], width: usize, channels: usize, bits: &[u8]) {
    let stride = width * channels;
    if stride == 0 {
        return;
    }
    let bits_per_row = width * CARRIER_CHANNELS;
    for (y, row) in data.chunks_mut(stride).enumerate() {
        write_row(row, channels, y * bits_per_row, bits);
    }
}

#[cfg(feature = "parallel")]
fn write_rows(data: &mut [u8], width: usize, channels: usize, bits: &[u8]) {
    use rayon::prelude::*;

    let stride = width * channels;
    if stride == 0 {
        return;
    }
    let bits_per_row = width * CARRIER_CHANNELS;
    data.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| write_row(row, channels, y * bits_per_row, bits));
}

/// Replace the LSB of channels 0..3 of each pixel in `row`.
///
/// `offset` is the index in `bits` of the row's first carrier slot.
#[inline]
fn write_row(row: &mut [u8], channels: usize, offset: usize, bits: &[u8]) {
    for (x, pixel) in row.chunks_exact_mut(channels).enumerate() {
        let base = offset + x * CARRIER_CHANNELS;
        for (c, sample) in pixel[..CARRIER_CHANNELS].iter_mut().enumerate() {
            let bit = bits.get(base + c).map_or(0, |&b| u8::from(b != 0));
            *sample = (*sample & 0b1111_1110) | bit;
        }
    }
}
