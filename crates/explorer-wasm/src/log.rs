//! Browser console logging.
//!
//! Messages go to `console.warn` on wasm32. Native builds (unit tests) drop
//! them, since `web-sys` imports cannot be called off the browser.

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}
