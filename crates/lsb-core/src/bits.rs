//! Bit codec: text to bitstream and back.
//!
//! Each character becomes its code point as an 8-bit big-endian group, so
//! only single-byte (Latin-1) characters are representable. A bitstream is a
//! `Vec<u8>` holding one bit per element.

use crate::error::StegoError;

/// Character that marks the end of the message on decode.
pub const SENTINEL: char = '\0';

/// Bits per encoded character.
pub const BITS_PER_CHAR: usize = 8;

/// Split a byte into its bits, most significant first.
#[inline]
pub fn bits_of(byte: u8) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (i, bit) in out.iter_mut().enumerate() {
        *bit = (byte >> (7 - i)) & 1;
    }
    out
}

/// Assemble up to eight bits, most significant first, into a byte.
///
/// Any non-zero element counts as a 1 bit.
#[inline]
pub fn byte_from_bits(bits: &[u8]) -> u8 {
    debug_assert!(bits.len() <= 8, "at most 8 bits per byte");
    bits.iter()
        .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit != 0))
}

/// Number of bits `text` encodes to, without allocating.
#[inline]
pub fn encoded_len(text: &str) -> usize {
    text.chars().count() * BITS_PER_CHAR
}

/// Serialize `text` into a bitstream.
///
/// Fails with [`StegoError::Encoding`] on the first character whose code
/// point exceeds 255.
///
/// # Example
///
/// ```
/// let bits = lsb_core::bits::encode("H").unwrap();
/// assert_eq!(bits, vec![0, 1, 0, 0, 1, 0, 0, 0]);
/// ```
pub fn encode(text: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(encoded_len(text));
    for (position, character) in text.chars().enumerate() {
        let byte = u8::try_from(character).map_err(|_| StegoError::Encoding {
            character,
            position,
        })?;
        bits.extend_from_slice(&bits_of(byte));
    }
    Ok(bits)
}

/// Rebuild text from a bitstream.
///
/// A trailing partial group is discarded, and trailing [`SENTINEL`]
/// characters are stripped. A message that itself ends in `'\0'` therefore
/// cannot survive a round trip.
pub fn decode(bits: &[u8]) -> String {
    let mut text: String = bits
        .chunks_exact(BITS_PER_CHAR)
        .map(|group| char::from(byte_from_bits(group)))
        .collect();
    let end = text.trim_end_matches(SENTINEL).len();
    text.truncate(end);
    text
}
