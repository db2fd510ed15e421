//! Test fixtures and constants.

use lsb_core::PixelGrid;

/// Messages used across tests
pub mod messages {
    /// The message from the reference usage example
    pub const OCEAN: &str = "Ocean water.";

    /// Two characters, bits 01001000 01101001
    pub const HI: &str = "Hi";

    /// Uses the upper half of Latin-1
    pub const LATIN1: &str = "Grüße, Zoë! ¿Qué?";

    /// Contains a character outside the single-byte range
    pub const WIDE: &str = "price: 5€";
}

/// Deterministic RGB cover with varied LSBs
pub fn rgb_cover(width: usize, height: usize) -> PixelGrid {
    pattern(width, height, 3)
}

/// Deterministic RGBA cover with a varying alpha channel
pub fn rgba_cover(width: usize, height: usize) -> PixelGrid {
    pattern(width, height, 4)
}

fn pattern(width: usize, height: usize, channels: usize) -> PixelGrid {
    let data = (0..width * height * channels)
        .map(|i| ((i * 131 + i / 7) % 256) as u8)
        .collect();
    PixelGrid::new(data, width, height, channels).unwrap()
}
