//! Conversions between JS values and bridge types.

use js_sys::{Array, Reflect};
use mymonero_bridge_core::{BridgeError, ModuleConstants};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Turn a JS `args` value into positional string arguments.
///
/// Must be an array of strings. Nothing is coerced; the first non-string
/// element rejects the call.
pub fn normalize_arguments(args: &JsValue) -> Result<Vec<String>, BridgeError> {
    if !Array::is_array(args) {
        return Err(BridgeError::arguments_not_array());
    }

    args.unchecked_ref::<Array>()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .as_string()
                .ok_or_else(|| BridgeError::non_string_argument(index, &js_type_name(&value)))
        })
        .collect()
}

/// Rejection value: an `Error` whose `message` is the core's text, with a
/// `category` property alongside it.
pub fn error_to_js(err: &BridgeError) -> JsValue {
    let js_err = js_sys::Error::new(&err.message);
    js_err.set_name(&err.category);
    Reflect::set(
        &js_err,
        &JsValue::from_str("category"),
        &JsValue::from_str(&err.category),
    )
    .ok();
    js_err.into()
}

/// Convert module constants to a plain JS object.
pub fn constants_to_js(constants: &ModuleConstants) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(constants)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

/// Build a frozen JS array of names.
pub fn frozen_string_array(names: &[String]) -> Array {
    let array: Array = names.iter().map(|n| JsValue::from_str(n)).collect();
    js_sys::Object::freeze(&array);
    array
}

fn js_type_name(value: &JsValue) -> String {
    if value.is_null() {
        "null".to_string()
    } else if Array::is_array(value) {
        "array".to_string()
    } else {
        value
            .js_typeof()
            .as_string()
            .unwrap_or_else(|| "unknown".to_string())
    }
}
