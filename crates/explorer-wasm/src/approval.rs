//! WASM bindings for collecting approved images from the review grid.

use explorer_core::approval::{self, ImageRecord};
use wasm_bindgen::prelude::*;

use crate::log;

/// File names of the images whose `isSelected` is the string `"true"`.
///
/// # Arguments
///
/// * `images` - Array of `{ file_name: string, isSelected: string }` objects
///
/// # Errors
///
/// Returns an error if `images` is not an array or a record has no
/// `file_name`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const approved = get_approved_images(images);
/// // ["a.png", "c.png"]
/// ```
#[wasm_bindgen]
pub fn get_approved_images(images: JsValue) -> Result<Vec<String>, JsValue> {
    let records: Vec<ImageRecord> = serde_wasm_bindgen::from_value(images).map_err(|e| {
        log::warn(&format!("Invalid image records: {}", e));
        JsValue::from_str(&format!("Invalid image records: {}", e))
    })?;

    Ok(approval::get_approved_images(&records))
}
