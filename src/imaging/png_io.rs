//! PNG decoding and lossless encoding of pixel grids.
//!
//! Any re-encoding that alters sample values destroys the hidden message, so
//! output is PNG only and the optional oxipng pass runs with every reduction
//! disabled.

use crate::error::AppError;
use lsb_core::PixelGrid;
use std::io::Cursor;
use std::path::Path;

/// Decode PNG bytes into an 8-bit pixel grid.
///
/// Palette and sub-8-bit grayscale images are expanded to 8-bit samples
/// (a tRNS chunk becomes an alpha channel). 16-bit images are rejected.
pub fn decode_png(bytes: &[u8]) -> Result<PixelGrid, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::PngDecode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedImage(format!(
            "{:?} bit samples (only 8-bit images are supported)",
            info.bit_depth
        )));
    }

    let grid = PixelGrid::new(
        buf,
        info.width as usize,
        info.height as usize,
        info.color_type.samples(),
    )?;
    Ok(grid)
}

/// Encode a pixel grid as an 8-bit PNG.
///
/// 1, 2, 3 and 4 channels map to Grayscale, GrayscaleAlpha, Rgb and Rgba.
/// With `optimize` set the result is recompressed by oxipng; if that fails
/// the unoptimized bytes are returned.
pub fn encode_png(grid: &PixelGrid, optimize: bool) -> Result<Vec<u8>, AppError> {
    let color_type = match grid.channels() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => {
            return Err(AppError::UnsupportedImage(format!(
                "{n} channels cannot be stored as PNG"
            )))
        }
    };
    let width = u32::try_from(grid.width())
        .map_err(|_| AppError::UnsupportedImage(format!("width {}", grid.width())))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| AppError::UnsupportedImage(format!("height {}", grid.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(grid.as_bytes())
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(&png_bytes, &lossless_options()) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Recompressed PNG"
            );
            Ok(optimized)
        }
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}

/// oxipng settings that keep color type, bit depth and every sample value.
fn lossless_options() -> oxipng::Options {
    oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        optimize_alpha: false,
        bit_depth_reduction: false,
        color_type_reduction: false,
        palette_reduction: false,
        grayscale_reduction: false,
        ..Default::default()
    }
}

/// Read and decode a PNG file.
pub fn load_grid(path: &Path) -> Result<PixelGrid, AppError> {
    let bytes = std::fs::read(path)?;
    let grid = decode_png(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        shape = %grid.shape(),
        "Loaded image"
    );
    Ok(grid)
}

/// Encode `grid` and write it to `path`, which must end in `.png`.
pub fn save_grid(path: &Path, grid: &PixelGrid, optimize: bool) -> Result<(), AppError> {
    if !is_png_path(path) {
        return Err(AppError::UnsupportedOutput(path.to_path_buf()));
    }
    let bytes = encode_png(grid, optimize)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Saved image"
    );
    Ok(())
}

fn is_png_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
