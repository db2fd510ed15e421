//! lsb-core: least-significant-bit text steganography
//!
//! Hides a short single-byte-encoded text message in the lowest bit of the
//! colour channels of an 8-bit pixel grid, and measures how much the image
//! changed in the process. The crate does no file I/O: callers decode images
//! into a [`PixelGrid`] and encode the result back, losslessly.
//!
//! # Quick Start
//!
//! ```
//! use lsb_core::{capacity, embed, extract, psnr, PixelGrid};
//!
//! let cover = PixelGrid::filled(16, 16, 3, 128);
//! assert_eq!(capacity(&cover), 16 * 16 * 3);
//!
//! let stego = embed(&cover, "Ocean water.").unwrap();
//! assert_eq!(extract(&stego).unwrap(), "Ocean water.");
//!
//! let db = psnr(&cover, &stego).unwrap();
//! assert!(db > 45.0);
//! ```
//!
//! # Bit Layout
//!
//! ```text
//! message   "Hi"
//!     |
//!     v
//! bits      01001000 01101001 00000000 ...   (8 bits per char, MSB first,
//!     |                                       zero-padded to capacity)
//!     v
//! pixels    (0,0).R (0,0).G (0,0).B (1,0).R ... (row-major, channels 0..3)
//!     |
//!     v
//! sample    sample & 0xFE | bit               (alpha is never touched)
//! ```
//!
//! Capacity is `height * width * 3` bits. Messages that do not fit are
//! rejected with [`StegoError::Capacity`]; nothing is ever truncated.
//!
//! # End of Message
//!
//! There is no length header. Unused capacity is filled with zero bits, which
//! decode as `'\0'`, and the extractor strips trailing `'\0'` characters. A
//! message that legitimately ends in `'\0'` loses those characters.
//!
//! # Features
//!
//! - `parallel`: embed and extract rows concurrently with `rayon`. Output is
//!   identical to the serial path.

pub mod bits;
pub mod capacity;
pub mod distortion;
pub mod embed;
pub mod error;
pub mod extract;
pub mod grid;


pub use capacity::{capacity, max_message_chars, validate};
pub use distortion::{analyze, difference_image, mean_squared_error, psnr, DistortionReport};
pub use embed::{embed, embed_bits};
pub use error::StegoError;
pub use extract::{extract, extract_bits};
pub use grid::{PixelGrid, Shape};
