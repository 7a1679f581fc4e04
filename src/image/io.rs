//! I/O helpers for color frames, grayscale artifacts and JSON reports.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into an owned RGB buffer.
//! - `load_color_image_resized`: same, resizing to a fixed size first.
//! - `save_gray_u8`: write a mask or edge map to a grayscale PNG.
//! - `save_rgb_u8`: write the annotated frame to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayU8, RgbU8};
use image::imageops::FilterType;
use image::{GrayImage, ImageBuffer, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_color_image(path: &Path) -> Result<RgbU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbU8::from_raw(width, height, img.into_raw()))
}

/// Load an image and resize it to exactly `width × height` before conversion.
pub fn load_color_image_resized(
    path: &Path,
    width: usize,
    height: usize,
) -> Result<RgbU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .resize_exact(width as u32, height as u32, FilterType::Triangle)
        .into_rgb8();
    Ok(RgbU8::from_raw(width, height, img.into_raw()))
}

/// Save a single-channel buffer to a grayscale PNG.
pub fn save_gray_u8(buffer: &GrayU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out: GrayImage =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, buffer.data.clone())
            .ok_or_else(|| "Failed to create grayscale buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an interleaved RGB buffer to a PNG.
pub fn save_rgb_u8(buffer: &RgbU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out: ImageBuffer<Rgb<u8>, Vec<u8>> =
        RgbImage::from_raw(buffer.w as u32, buffer.h as u32, buffer.data.clone())
            .ok_or_else(|| "Failed to create RGB buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
