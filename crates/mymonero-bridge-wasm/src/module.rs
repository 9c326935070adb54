//! The `MyMoneroCore` class exposed to JavaScript.

use std::rc::Rc;

use js_sys::{Array, Promise};
use mymonero_bridge_core::{Bridge, BridgeConfig, MyMoneroModule, NativeModule, MODULE_NAME};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::console;
use crate::convert::{constants_to_js, error_to_js, frozen_string_array, normalize_arguments};
use crate::native::{JsCore, JsNativeCore};

/// Bridge module handed to managed code.
///
/// Each call returns a `Promise` that resolves with the core's string or
/// rejects with an `Error` carrying `category` and `message`.
#[wasm_bindgen(js_name = MyMoneroCore)]
pub struct MyMoneroCore {
    module: Rc<MyMoneroModule<JsCore>>,
    /// Frozen copy of the core's method names, built once.
    method_names: Array,
}

#[wasm_bindgen(js_class = MyMoneroCore)]
impl MyMoneroCore {
    /// Wrap a JS core object.
    ///
    /// # Arguments
    /// * `core` - Object with `callCore` and `listMethodNames`
    /// * `config` - Optional `{ logCalls }`
    #[wasm_bindgen(constructor)]
    pub fn new(core: JsNativeCore, config: JsValue) -> Result<MyMoneroCore, JsValue> {
        let config = parse_config(config)?;
        let bridge = Bridge::with_config(JsCore::new(core), config);
        let method_names = frozen_string_array(bridge.method_names());

        if bridge.config().log_calls {
            console::debug(&format!(
                "{}: {} core methods",
                MODULE_NAME,
                bridge.method_names().len()
            ));
        }

        Ok(MyMoneroCore {
            module: Rc::new(MyMoneroModule::new(bridge)),
            method_names,
        })
    }

    /// Call a core method with positional string arguments.
    pub fn invoke(&self, method: String, args: JsValue) -> Promise {
        let bridge = self.module.bridge();
        let args = match normalize_arguments(&args) {
            Ok(args) => args,
            Err(err) => {
                self.log_rejection(&method, &err.message);
                return Promise::reject(&error_to_js(&err));
            }
        };

        if bridge.config().log_calls {
            console::debug(&format!("invoke {} ({} args)", method, args.len()));
        }

        let module = Rc::clone(&self.module);
        future_to_promise(async move {
            match module.invoke(&method, &args) {
                Ok(value) => Ok(JsValue::from_str(&value)),
                Err(err) => {
                    if module.bridge().config().log_calls {
                        console::warn(&format!("{} rejected: {}", method, err.message));
                    }
                    Err(error_to_js(&err))
                }
            }
        })
    }

    /// Same as `invoke`; kept under the name older callers use.
    #[wasm_bindgen(js_name = callMyMonero)]
    pub fn call_my_monero(&self, method: String, args: JsValue) -> Promise {
        self.invoke(method, args)
    }

    /// Method names the core reported at construction.
    #[wasm_bindgen(getter, js_name = methodNames)]
    pub fn method_names(&self) -> Array {
        self.method_names.clone()
    }

    /// Registry name of this module.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.module.name().to_string()
    }

    /// Load-time constants as a plain object (`{ methodNames }`).
    #[wasm_bindgen(js_name = getConstants)]
    pub fn get_constants(&self) -> Result<JsValue, JsValue> {
        constants_to_js(&self.module.constants())
    }

    /// Names of the callable operations.
    #[wasm_bindgen(getter)]
    pub fn operations(&self) -> Array {
        self.module
            .operations()
            .iter()
            .map(|op| JsValue::from_str(op))
            .collect()
    }
}

impl MyMoneroCore {
    fn log_rejection(&self, method: &str, message: &str) {
        if self.module.bridge().config().log_calls {
            console::warn(&format!("{} rejected: {}", method, message));
        }
    }
}

fn parse_config(config: JsValue) -> Result<BridgeConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(BridgeConfig::default());
    }

    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("Invalid config: {}", e))))
}
