//! Image file I/O.
//!
//! Decodes PNG files into [`lsb_core::PixelGrid`] and encodes grids back to
//! PNG without altering any sample.

pub mod png_io;

pub use png_io::{decode_png, encode_png, load_grid, save_grid};
