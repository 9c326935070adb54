//! JavaScript-provided core.
//!
//! The MyMonero core reaches the bindings as a JS object (typically the
//! emscripten build of mymonero-core-cpp) with two functions, `callCore` and
//! `listMethodNames`. [`JsCore`] adapts it to [`NativeCore`] and turns
//! anything it throws into a [`CoreError`].

use js_sys::{Array, Reflect};
use mymonero_bridge_core::{CoreError, NativeCore};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(typescript_custom_section)]
const TS_NATIVE_CORE: &'static str = r#"
/**
 * The wallet core the bridge forwards to.
 */
export interface NativeCore {
  callCore(method: string, args: string[]): string;
  listMethodNames(): string[];
}
"#;

#[wasm_bindgen]
extern "C" {
    /// A JS object implementing the `NativeCore` interface.
    #[wasm_bindgen(typescript_type = "NativeCore")]
    pub type JsNativeCore;

    #[wasm_bindgen(method, catch, js_name = callCore)]
    fn call_core(this: &JsNativeCore, method: &str, args: &Array) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = listMethodNames)]
    fn list_method_names(this: &JsNativeCore) -> Result<JsValue, JsValue>;
}

/// [`NativeCore`] over a JS core object.
pub struct JsCore {
    inner: JsNativeCore,
}

impl JsCore {
    pub fn new(inner: JsNativeCore) -> Self {
        JsCore { inner }
    }
}

impl NativeCore for JsCore {
    fn call_core(&self, method: &str, args: &[String]) -> Result<String, CoreError> {
        let js_args: Array = args.iter().map(|a| JsValue::from_str(a)).collect();
        let value = self
            .inner
            .call_core(method, &js_args)
            .map_err(|thrown| thrown_to_core_error(&thrown))?;

        value
            .as_string()
            .ok_or_else(|| CoreError::Failed(format!("{} returned a non-string result", method)))
    }

    fn list_method_names(&self) -> Vec<String> {
        let value = match self.inner.list_method_names() {
            Ok(value) => value,
            Err(thrown) => {
                crate::console::warn(&format!(
                    "listMethodNames threw: {}",
                    thrown_to_core_error(&thrown)
                ));
                return Vec::new();
            }
        };

        if !Array::is_array(&value) {
            crate::console::warn("listMethodNames did not return an array");
            return Vec::new();
        }

        let names: Option<Vec<String>> = value
            .unchecked_into::<Array>()
            .iter()
            .map(|name| name.as_string())
            .collect();
        names.unwrap_or_else(|| {
            crate::console::warn("listMethodNames returned a non-string entry");
            Vec::new()
        })
    }
}

/// Pull a message out of whatever JS threw.
pub(crate) fn thrown_to_core_error(thrown: &JsValue) -> CoreError {
    if let Some(err) = thrown.dyn_ref::<js_sys::Error>() {
        return CoreError::Failed(String::from(err.message()));
    }
    if let Some(message) = thrown.as_string() {
        return CoreError::Failed(message);
    }
    // Plain objects and Errors from another realm still carry a message.
    if thrown.is_object() {
        if let Some(message) = Reflect::get(thrown, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
        {
            return CoreError::Failed(message);
        }
    }
    CoreError::Faulted
}
