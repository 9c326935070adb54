//! Browser console output.

use wasm_bindgen::JsValue;

/// Log a debug line to the console.
pub fn debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

/// Log a warning to the console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
