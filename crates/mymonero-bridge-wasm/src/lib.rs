//! WebAssembly bindings for the MyMonero core bridge.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Calling core methods by name with string arguments, as Promises
//! - Reading the core's method names once at load
//! - Module identity for host registries

use wasm_bindgen::prelude::*;

pub mod console;
pub mod convert;
pub mod module;
pub mod native;

// Re-export main types for JS access
pub use module::MyMoneroCore;
pub use native::{JsCore, JsNativeCore};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Name the bridge registers under by default.
#[wasm_bindgen(js_name = moduleName)]
pub fn module_name() -> String {
    mymonero_bridge_core::MODULE_NAME.to_string()
}
