//! WASM bindings for decoding scan volumes in the browser.

use explorer_core::volume;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::log;

/// Decode a NIfTI-1 file (`.nii` or `.nii.gz`) into viewer slices.
///
/// # Arguments
///
/// * `bytes` - The file contents as a `Uint8Array`
///
/// # Returns
///
/// A plain object `{ metadata: { image: { dims: "[x, y, z]" } }, slices: string[] }`
/// where each slice is a base64 PNG.
///
/// # Errors
///
/// Returns an error if the file is not a NIfTI-1 volume with 16-bit integer
/// voxels, or is truncated.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const { slices } = decode_nifti_slices(bytes);
/// img.src = `data:image/png;base64,${slices[0]}`;
/// ```
#[wasm_bindgen]
pub fn decode_nifti_slices(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let data = volume::decode_nifti(bytes)
        .and_then(|decoded| volume::build_image_data(&decoded))
        .map_err(|e| {
            log::warn(&format!("Failed to decode volume: {}", e));
            JsValue::from_str(&e.to_string())
        })?;

    data.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
