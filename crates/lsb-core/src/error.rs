//! Error type for the steganography core.
//!
//! Every failure is a deterministic input-validation failure raised before any
//! sample is written, so none of them is retried or recovered internally.

use crate::grid::Shape;
use std::fmt;

/// Errors returned by the codec, planner, embedder, extractor and analyzer.
///
/// # Example
///
/// ```
/// use lsb_core::{embed, PixelGrid, StegoError};
///
/// let grid = PixelGrid::new(vec![0; 3], 1, 1, 3).unwrap();
/// match embed(&grid, "too long") {
///     Err(StegoError::Capacity { required, available }) => {
///         assert_eq!(required, 64);
///         assert_eq!(available, 3);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StegoError {
    /// A character cannot be represented as a single byte.
    Encoding {
        /// The offending character
        character: char,
        /// Index of the character within the message
        position: usize,
    },
    /// The message needs more bits than the grid can hold.
    Capacity {
        /// Bits the encoded message occupies
        required: usize,
        /// Bits the grid offers (`height * width * 3`)
        available: usize,
    },
    /// Two grids that must share a shape do not.
    ShapeMismatch {
        /// Shape of the first grid
        left: Shape,
        /// Shape of the second grid
        right: Shape,
    },
    /// The grid has fewer than three colour channels.
    UnsupportedChannels {
        /// Channel count of the rejected grid
        channels: usize,
    },
    /// Sample buffer does not match the declared dimensions.
    InvalidGrid {
        /// `width * height * channels`, or `usize::MAX` when that overflows
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StegoError::Encoding {
                character,
                position,
            } => write!(
                f,
                "character {:?} (U+{:04X}) at position {} is outside the single-byte range",
                character, *character as u32, position
            ),
            StegoError::Capacity {
                required,
                available,
            } => write!(
                f,
                "message needs {} bits but the image holds only {}",
                required, available
            ),
            StegoError::ShapeMismatch { left, right } => {
                write!(f, "grid shapes differ: {} vs {}", left, right)
            }
            StegoError::UnsupportedChannels { channels } => write!(
                f,
                "at least 3 colour channels required, grid has {}",
                channels
            ),
            StegoError::InvalidGrid { expected, actual } => write!(
                f,
                "sample buffer has {} bytes, dimensions require {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for StegoError {}
