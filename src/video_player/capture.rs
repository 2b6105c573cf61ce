// SPDX-License-Identifier: MPL-2.0
//! Output files for recordings and screenshots.
//!
//! Both features create their destination file before any data is
//! written. Screenshots are encoded here as JPEG; recordings are written
//! by the engine into the file created here.

use crate::domain::video::Bitmap;
use crate::error::CaptureError;
use chrono::{DateTime, Local};
use image_rs::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Kind of capture and the file extension it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    Recording,
    Screenshot,
}

impl CaptureKind {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            CaptureKind::Recording => "mp4",
            CaptureKind::Screenshot => "jpg",
        }
    }
}

/// Generates the file name for a capture taken at `now`.
///
/// Format: `{kind}_{YYYYMMDD_HHMMSS_mmm}.{ext}`
#[must_use]
pub fn generate_filename(kind: CaptureKind, now: DateTime<Local>) -> String {
    let prefix = match kind {
        CaptureKind::Recording => "record",
        CaptureKind::Screenshot => "screenshot",
    };
    format!(
        "{}_{}.{}",
        prefix,
        now.format("%Y%m%d_%H%M%S_%3f"),
        kind.extension()
    )
}

/// Creates a fresh, empty output file in `dir`.
///
/// The directory is created if missing. An existing file with the same
/// name is never overwritten.
///
/// # Errors
///
/// Returns [`CaptureError::FileCreation`] if the directory or file cannot
/// be created.
pub fn create_output_file(dir: &Path, kind: CaptureKind) -> Result<PathBuf, CaptureError> {
    fs::create_dir_all(dir).map_err(|e| CaptureError::FileCreation(e.to_string()))?;

    let path = dir.join(generate_filename(kind, Local::now()));
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| CaptureError::FileCreation(format!("{}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), ?kind, "created capture file");
    Ok(path)
}

/// Encodes a frame as JPEG into `path`.
///
/// # Errors
///
/// Returns [`CaptureError::EmptyFrame`] for frames with zero area and
/// [`CaptureError::Encode`] if the pixel data does not match the
/// dimensions or the file cannot be written.
pub fn save_jpeg(bitmap: &Bitmap, path: &Path) -> Result<(), CaptureError> {
    if bitmap.is_empty() {
        return Err(CaptureError::EmptyFrame {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    let img: ImageBuffer<Rgba<u8>, _> =
        ImageBuffer::from_raw(bitmap.width, bitmap.height, (*bitmap.rgba_data).clone())
            .ok_or_else(|| {
                CaptureError::Encode("pixel data does not match frame size".to_string())
            })?;

    // JPEG has no alpha channel
    DynamicImage::ImageRgba8(img)
        .to_rgb8()
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|e| CaptureError::Encode(e.to_string()))
}

/// Removes a capture file that never received valid content.
pub fn discard_output_file(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove capture file");
    }
}
