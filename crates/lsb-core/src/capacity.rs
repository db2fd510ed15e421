//! Capacity planning.
//!
//! One bit fits in the least significant bit of each of the first three
//! channels of every pixel. Alpha and any further channels carry nothing.

use crate::bits::BITS_PER_CHAR;
use crate::error::StegoError;
use crate::grid::PixelGrid;

/// Channels per pixel that carry payload bits.
pub const CARRIER_CHANNELS: usize = 3;

/// Embeddable bits: `height * width * 3`.
#[inline]
pub fn capacity(grid: &PixelGrid) -> usize {
    grid.height() * grid.width() * CARRIER_CHANNELS
}

/// Longest message, in characters, that fits in `grid`.
#[inline]
pub fn max_message_chars(grid: &PixelGrid) -> usize {
    capacity(grid) / BITS_PER_CHAR
}

/// Reject grids with fewer than three colour channels.
pub fn check_channels(grid: &PixelGrid) -> Result<(), StegoError> {
    if grid.channels() < CARRIER_CHANNELS {
        return Err(StegoError::UnsupportedChannels {
            channels: grid.channels(),
        });
    }
    Ok(())
}

/// Check that a `bit_len`-bit payload can be embedded in `grid`.
///
/// # Errors
/// - [`StegoError::UnsupportedChannels`] if the grid has fewer than 3 channels.
/// - [`StegoError::Capacity`] if `bit_len > capacity(grid)`.
pub fn validate(grid: &PixelGrid, bit_len: usize) -> Result<(), StegoError> {
    check_channels(grid)?;
    let available = capacity(grid);
    if bit_len > available {
        return Err(StegoError::Capacity {
            required: bit_len,
            available,
        });
    }
    Ok(())
}
