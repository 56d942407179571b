//! Explorer WASM - WebAssembly bindings for the cohort image explorer
//!
//! This crate exposes the explorer-core helpers to the JavaScript frontend.
//!
//! # Module Structure
//!
//! - `rotation` - Rotate buttons of the image viewer (CSS class cycling)
//! - `auth` - Basic Authentication header for the image server
//! - `approval` - Approved file names from the review grid
//! - `volume` - NIfTI scan decoding into base64 PNG slices
//!
//! # Usage
//!
//! ```typescript
//! import init, { rotate_right, get_auth_header, get_approved_images } from '@cohort/explorer-wasm';
//!
//! await init();
//!
//! img.className = rotate_right(img.className);
//! const response = await fetch(url, { headers: get_auth_header(user, password) });
//! const approved = get_approved_images(images);
//! ```

use wasm_bindgen::prelude::*;

mod approval;
mod auth;
mod log;
mod rotation;
mod volume;

// Re-export public functions
pub use approval::get_approved_images;
pub use auth::{basic_auth_value, get_auth_header};
pub use rotation::{rotate_label_left, rotate_label_right, rotate_left, rotate_right};
pub use volume::decode_nifti_slices;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
