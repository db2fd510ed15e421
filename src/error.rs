use lsb_core::StegoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Steganography error: {0}")]
    Stego(#[from] StegoError),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Output must be a lossless PNG file: {}", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
