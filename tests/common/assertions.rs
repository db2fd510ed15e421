//! Assertion helpers for tests.

use lsb_core::PixelGrid;
use pretty_assertions::assert_eq;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.len() > 8 && bytes[..8] == PNG_SIGNATURE,
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert two grids differ only in the LSB of channels 0..3
pub fn assert_lsb_only_changes(cover: &PixelGrid, stego: &PixelGrid) {
    assert_eq!(cover.shape(), stego.shape(), "Shapes differ");
    let channels = cover.channels();
    for (i, (&a, &b)) in cover.as_bytes().iter().zip(stego.as_bytes()).enumerate() {
        if i % channels < 3 {
            assert_eq!(a & 0xFE, b & 0xFE, "High bits changed at sample {i}");
        } else {
            assert_eq!(a, b, "Non-colour channel changed at sample {i}");
        }
    }
}
