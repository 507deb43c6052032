//! PNG previews of raw images

use crate::io::error::{HalftoneError, IoContext, Result, invalid_parameter};
use crate::io::raw::{Channels, RawImage};
use image::{GrayImage, RgbImage};
use std::path::Path;

/// Export a raw image as an 8-bit PNG
///
/// # Errors
///
/// Returns an error if:
/// - The image dimensions do not fit the PNG encoder
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(raw: &RawImage, output_path: &Path) -> Result<()> {
    let (width, height) = u32::try_from(raw.width())
        .ok()
        .zip(u32::try_from(raw.height()).ok())
        .ok_or_else(|| oversized(raw))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let bytes = raw.bytes().to_vec();
    let saved = match raw.channels() {
        Channels::Gray => GrayImage::from_raw(width, height, bytes)
            .ok_or_else(|| dimension_error(raw))?
            .save(output_path),
        Channels::Rgb => RgbImage::from_raw(width, height, bytes)
            .ok_or_else(|| dimension_error(raw))?
            .save(output_path),
    };

    saved.map_err(|source| HalftoneError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    })
}

fn oversized(raw: &RawImage) -> HalftoneError {
    invalid_parameter(
        "dimensions",
        &format!("{}x{}", raw.width(), raw.height()),
        &"exceeds the PNG size limit",
    )
}

fn dimension_error(raw: &RawImage) -> HalftoneError {
    HalftoneError::DimensionMismatch {
        expected: raw.width() * raw.height() * raw.channels().count(),
        actual: raw.bytes().len(),
    }
}
