//! Slice encoding for the viewer.
//!
//! Each axial slice of a decoded volume becomes an 8-bit grayscale PNG,
//! base64 encoded so the frontend can drop it straight into a `data:` URL.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::types::{ImageData, NiftiVolume, VolumeError};

/// Encode 8-bit grayscale pixels as a PNG.
///
/// # Arguments
///
/// * `pixels` - One byte per pixel, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn encode_slice_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, VolumeError> {
    let expected = width as usize * height as usize;
    if width == 0 || height == 0 || pixels.len() != expected {
        return Err(VolumeError::EncodingFailed(format!(
            "expected {expected} bytes for {width}x{height}, got {}",
            pixels.len()
        )));
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::L8)
        .map_err(|e| VolumeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode every slice of `volume` as a base64 PNG, first slice first.
pub fn build_image_data(volume: &NiftiVolume) -> Result<ImageData, VolumeError> {
    let (width, height, depth) = (volume.width(), volume.height(), volume.depth());

    let slices = (0..depth)
        .filter_map(|z| volume.slice(z))
        .map(|pixels| {
            encode_slice_png(pixels, width, height).map(|png| BASE64_STANDARD.encode(png))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let metadata = BTreeMap::from([(
        "image".to_string(),
        BTreeMap::from([("dims".to_string(), format!("[{width}, {height}, {depth}]"))]),
    )]);

    Ok(ImageData { metadata, slices })
}
