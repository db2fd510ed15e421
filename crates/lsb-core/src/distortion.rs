//! Distortion analysis between a cover and its stego version.
//!
//! All arithmetic is done on widened values: differences are true absolute
//! differences and squared errors never wrap.

use crate::error::StegoError;
use crate::grid::PixelGrid;

/// Peak sample value for 8-bit channels.
pub const MAX_SAMPLE: f64 = 255.0;

/// Difference grid plus scalar metrics for two same-shaped grids.
#[derive(Debug, Clone, PartialEq)]
pub struct DistortionReport {
    /// Per-sample `|a - b|`, same shape as the inputs.
    pub difference: PixelGrid,
    /// Mean squared error over all samples.
    pub mse: f64,
    /// Peak signal-to-noise ratio in dB; `f64::INFINITY` when `mse == 0`.
    pub psnr: f64,
}

impl DistortionReport {
    /// True when the two grids were identical.
    pub fn is_lossless(&self) -> bool {
        self.mse == 0.0
    }
}

fn check_shapes(a: &PixelGrid, b: &PixelGrid) -> Result<(), StegoError> {
    if a.shape() != b.shape() {
        return Err(StegoError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Per-sample absolute difference of two grids.
///
/// # Errors
/// [`StegoError::ShapeMismatch`] if height, width or channel count differ.
pub fn difference_image(a: &PixelGrid, b: &PixelGrid) -> Result<PixelGrid, StegoError> {
    check_shapes(a, b)?;
    let data = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(&x, &y)| x.abs_diff(y))
        .collect();
    PixelGrid::new(data, a.width(), a.height(), a.channels())
}

/// Mean squared error over every sample, alpha included.
///
/// Empty grids have an MSE of 0.
pub fn mean_squared_error(a: &PixelGrid, b: &PixelGrid) -> Result<f64, StegoError> {
    check_shapes(a, b)?;
    let n = a.as_bytes().len();
    if n == 0 {
        return Ok(0.0);
    }
    let sum: u64 = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(&x, &y)| {
            let d = u64::from(x.abs_diff(y));
            d * d
        })
        .sum();
    Ok(sum as f64 / n as f64)
}

/// PSNR in decibels for a given MSE.
///
/// Returns `f64::INFINITY` for an MSE of zero; this is the value identical
/// grids report.
#[inline]
pub fn psnr_from_mse(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    20.0 * (MAX_SAMPLE / mse.sqrt()).log10()
}

/// Peak signal-to-noise ratio between two grids, in decibels.
///
/// # Example
///
/// ```
/// use lsb_core::{psnr, PixelGrid};
///
/// let a = PixelGrid::filled(2, 2, 3, 10);
/// assert_eq!(psnr(&a, &a).unwrap(), f64::INFINITY);
///
/// let b = PixelGrid::filled(2, 2, 3, 11);
/// let db = psnr(&a, &b).unwrap();
/// assert!((db - 48.1308).abs() < 1e-3);
/// ```
pub fn psnr(a: &PixelGrid, b: &PixelGrid) -> Result<f64, StegoError> {
    Ok(psnr_from_mse(mean_squared_error(a, b)?))
}

/// Difference image, MSE and PSNR in one pass over the shape check.
pub fn analyze(a: &PixelGrid, b: &PixelGrid) -> Result<DistortionReport, StegoError> {
    let difference = difference_image(a, b)?;
    let mse = mean_squared_error(a, b)?;
    Ok(DistortionReport {
        difference,
        mse,
        psnr: psnr_from_mse(mse),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_absolute() {
        let a = PixelGrid::new(vec![10, 200, 0], 1, 1, 3).unwrap();
        let b = PixelGrid::new(vec![11, 100, 255], 1, 1, 3).unwrap();
        let diff = difference_image(&a, &b).unwrap();
        assert_eq!(diff.as_bytes(), &[1, 100, 255]);
        assert_eq!(diff.shape(), a.shape());
    }

    #[test]
    fn test_difference_is_symmetric() {
        let a = PixelGrid::new(vec![3, 9, 27, 81], 2, 2, 1).unwrap();
        let b = PixelGrid::new(vec![81, 27, 9, 3], 2, 2, 1).unwrap();
        assert_eq!(
            difference_image(&a, &b).unwrap(),
            difference_image(&b, &a).unwrap()
        );
    }

    #[test]
    fn test_shape_mismatch_channels() {
        let a = PixelGrid::filled(2, 2, 3, 0);
        let b = PixelGrid::filled(2, 2, 4, 0);
        assert!(matches!(
            difference_image(&a, &b),
            Err(StegoError::ShapeMismatch { .. })
        ));
        assert!(matches!(psnr(&a, &b), Err(StegoError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_shape_mismatch_transposed() {
        // Same sample count, different geometry
        let a = PixelGrid::filled(2, 3, 3, 0);
        let b = PixelGrid::filled(3, 2, 3, 0);
        assert!(difference_image(&a, &b).is_err());
    }

    #[test]
    fn test_mse_no_wraparound() {
        let a = PixelGrid::new(vec![0, 0, 0], 1, 1, 3).unwrap();
        let b = PixelGrid::new(vec![255, 255, 255], 1, 1, 3).unwrap();
        assert_eq!(mean_squared_error(&a, &b).unwrap(), 65025.0);
        assert!((psnr(&a, &b).unwrap() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_psnr_identical_is_infinite() {
        let a = PixelGrid::filled(3, 3, 4, 77);
        assert!(psnr(&a, &a).unwrap().is_infinite());
    }

    #[test]
    fn test_psnr_empty_is_infinite() {
        let a = PixelGrid::filled(0, 0, 3, 0);
        assert_eq!(psnr(&a, &a).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_analyze_bundles_metrics() {
        let a = PixelGrid::filled(2, 1, 3, 100);
        let b = PixelGrid::new(vec![100, 101, 100, 99, 100, 100], 2, 1, 3).unwrap();
        let report = analyze(&a, &b).unwrap();
        assert_eq!(report.difference.as_bytes(), &[0, 1, 0, 1, 0, 0]);
        assert!((report.mse - 2.0 / 6.0).abs() < 1e-12);
        assert!(report.psnr.is_finite());
        assert!(!report.is_lossless());
        assert!(analyze(&a, &a).unwrap().is_lossless());
    }
}
