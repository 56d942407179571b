//! WASM bindings for the image server's Basic Authentication header.

use explorer_core::auth;
use wasm_bindgen::prelude::*;

/// Build the headers object for a `fetch` call.
///
/// Returns a plain object `{ Authorization: "Basic ..." }`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const headers = get_auth_header(username, password);
/// const response = await fetch(url, { headers });
/// ```
#[wasm_bindgen]
pub fn get_auth_header(username: &str, password: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&auth::get_auth_header(username, password))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The `Authorization` header value on its own.
#[wasm_bindgen]
pub fn basic_auth_value(username: &str, password: &str) -> String {
    auth::get_auth_header(username, password).value().to_string()
}


/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_get_auth_header_object() {
        let headers = get_auth_header("user", "pass").unwrap();
        let value = js_sys::Reflect::get(&headers, &JsValue::from_str("Authorization")).unwrap();
        assert_eq!(value.as_string().as_deref(), Some("Basic dXNlcjpwYXNz"));

        let keys = js_sys::Object::keys(headers.unchecked_ref());
        assert_eq!(keys.length(), 1);
    }
}
