//! File-level steganography operations.
//!
//! Wires PNG I/O and configuration around the pure operations in `lsb_core`.

use crate::error::AppError;
use crate::imaging::{load_grid, save_grid};
use crate::models::AppConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of hiding a message.
///
/// Non-finite PSNR values serialize to JSON as `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HideReport {
    pub output: PathBuf,
    pub message_chars: usize,
    pub message_bits: usize,
    pub capacity_bits: usize,
    pub psnr_db: f64,
}

/// Result of comparing two images.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DifferenceReport {
    pub output: PathBuf,
    pub mse: f64,
    pub psnr_db: f64,
    pub changed_samples: usize,
}

/// How much an image can hold.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CapacityReport {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub capacity_bits: usize,
    pub max_message_chars: usize,
}

/// Hide, extract and compare in one go.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoundtripReport {
    pub hide: HideReport,
    pub extracted: String,
    pub intact: bool,
    pub difference: DifferenceReport,
}

pub struct StegoService {
    config: AppConfig,
}

impl StegoService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Embed `message` into the cover PNG and write the stego PNG.
    ///
    /// Nothing is written when the message cannot be encoded or does not fit.
    pub fn hide(
        &self,
        cover: &Path,
        message: &str,
        output: Option<&Path>,
    ) -> Result<HideReport, AppError> {
        let output = output.unwrap_or(self.config.output.stego.as_path());
        let cover_grid = load_grid(cover)?;

        let stego = lsb_core::embed(&cover_grid, message)?;
        save_grid(output, &stego, self.config.output.optimize)?;
        let psnr_db = lsb_core::psnr(&cover_grid, &stego)?;

        let report = HideReport {
            output: output.to_path_buf(),
            message_chars: message.chars().count(),
            message_bits: lsb_core::bits::encoded_len(message),
            capacity_bits: lsb_core::capacity(&cover_grid),
            psnr_db,
        };
        tracing::info!(
            cover = %cover.display(),
            output = %report.output.display(),
            bits = report.message_bits,
            capacity = report.capacity_bits,
            psnr = report.psnr_db,
            "Message hidden"
        );
        Ok(report)
    }

    /// Recover the message hidden in a stego PNG.
    pub fn extract(&self, path: &Path) -> Result<String, AppError> {
        let grid = load_grid(path)?;
        let message = lsb_core::extract(&grid)?;
        tracing::info!(
            path = %path.display(),
            chars = message.chars().count(),
            "Message extracted"
        );
        Ok(message)
    }

    /// Write the absolute-difference image of two PNGs and report MSE/PSNR.
    pub fn difference(
        &self,
        original: &Path,
        stego: &Path,
        output: Option<&Path>,
    ) -> Result<DifferenceReport, AppError> {
        let output = output.unwrap_or(self.config.output.difference.as_path());
        let a = load_grid(original)?;
        let b = load_grid(stego)?;

        let analysis = lsb_core::analyze(&a, &b)?;
        save_grid(output, &analysis.difference, self.config.output.optimize)?;

        let report = DifferenceReport {
            output: output.to_path_buf(),
            mse: analysis.mse,
            psnr_db: analysis.psnr,
            changed_samples: analysis
                .difference
                .as_bytes()
                .iter()
                .filter(|&&d| d != 0)
                .count(),
        };
        tracing::info!(
            output = %report.output.display(),
            mse = report.mse,
            psnr = report.psnr_db,
            changed = report.changed_samples,
            "Difference image written"
        );
        Ok(report)
    }

    /// PSNR between two PNGs in dB (`f64::INFINITY` when identical).
    pub fn psnr(&self, original: &Path, stego: &Path) -> Result<f64, AppError> {
        let a = load_grid(original)?;
        let b = load_grid(stego)?;
        let db = lsb_core::psnr(&a, &b)?;
        tracing::info!(psnr = db, "PSNR computed");
        Ok(db)
    }

    /// Embedding capacity of a PNG.
    pub fn capacity(&self, path: &Path) -> Result<CapacityReport, AppError> {
        let grid = load_grid(path)?;
        lsb_core::capacity::check_channels(&grid)?;
        Ok(CapacityReport {
            width: grid.width(),
            height: grid.height(),
            channels: grid.channels(),
            capacity_bits: lsb_core::capacity(&grid),
            max_message_chars: lsb_core::max_message_chars(&grid),
        })
    }

    /// Hide, reload and extract, then compare cover and stego on disk.
    pub fn roundtrip(
        &self,
        cover: &Path,
        message: &str,
        stego_output: Option<&Path>,
        difference_output: Option<&Path>,
    ) -> Result<RoundtripReport, AppError> {
        let hide = self.hide(cover, message, stego_output)?;
        let extracted = self.extract(&hide.output)?;
        let difference = self.difference(cover, &hide.output, difference_output)?;
        let intact = extracted == message;
        if !intact {
            tracing::warn!(
                expected = message,
                extracted = %extracted,
                "Extracted message differs from the hidden one"
            );
        }
        Ok(RoundtripReport {
            hide,
            extracted,
            intact,
            difference,
        })
    }
}
