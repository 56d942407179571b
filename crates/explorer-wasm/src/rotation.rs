//! WASM bindings for the viewer's rotate buttons.
//!
//! The image viewer keeps the current rotation as a CSS class on the image
//! element and swaps it on every click. Unknown classes reset to
//! `image_rotate_0` and leave a warning in the console.

use explorer_core::rotation::{self, Rotation, RotationParseError};
use wasm_bindgen::prelude::*;

use crate::log;

/// Warn in the console when a value from the page is about to be reset.
fn warn_on_reset(parsed: Result<Rotation, RotationParseError>) {
    if let Err(e) = parsed {
        log::warn(&format!("{}, resetting rotation to 0", e));
    }
}

/// Next CSS class after a clockwise quarter-turn.
///
/// # Example (TypeScript)
///
/// ```typescript
/// img.classList.replace(current, rotate_right(current));
/// ```
#[wasm_bindgen]
pub fn rotate_right(input_image_class: &str) -> String {
    warn_on_reset(Rotation::from_css_class(input_image_class));
    rotation::rotate_class_right(input_image_class).to_string()
}

/// Next CSS class after a counter-clockwise quarter-turn.
#[wasm_bindgen]
pub fn rotate_left(input_image_class: &str) -> String {
    warn_on_reset(Rotation::from_css_class(input_image_class));
    rotation::rotate_class_left(input_image_class).to_string()
}

/// Next degree label (`"0"`, `"90"`, `"180"`, `"270"`) after a clockwise quarter-turn.
#[wasm_bindgen]
pub fn rotate_label_right(label: &str) -> String {
    warn_on_reset(Rotation::from_label(label));
    rotation::rotate_right(label).to_string()
}

/// Next degree label after a counter-clockwise quarter-turn.
#[wasm_bindgen]
pub fn rotate_label_left(label: &str) -> String {
    warn_on_reset(Rotation::from_label(label));
    rotation::rotate_left(label).to_string()
}
