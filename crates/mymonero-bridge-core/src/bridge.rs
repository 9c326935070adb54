//! The bridge: marshal a call, delegate to the core, map the outcome.
//!
//! [`Bridge::invoke`] is straight-line: run the core's entry point inside a
//! panic guard and flatten whatever comes back into a [`CallResult`]. The
//! bridge keeps no state between calls other than the method-name list it
//! reads once at construction.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::Value;
use tracing::{debug, error};

use crate::call::{CallRequest, CallResult};
use crate::config::BridgeConfig;
use crate::error::{BridgeError, CoreError};
use crate::module::MODULE_NAME;
use crate::native::NativeCore;

/// Call bridge over a native core.
///
/// A bridge over a `Sync` core is `Sync`; concurrent calls are not
/// serialized here, so thread safety of the core is the core's concern.
pub struct Bridge<C> {
    core: C,
    config: BridgeConfig,
    method_names: Vec<String>,
}

impl<C: NativeCore> Bridge<C> {
    /// Wrap `core` with the default configuration.
    pub fn new(core: C) -> Self {
        Self::with_config(core, BridgeConfig::default())
    }

    /// Wrap `core`, reading its method names once.
    pub fn with_config(core: C, config: BridgeConfig) -> Self {
        let method_names = match catch_unwind(AssertUnwindSafe(|| core.list_method_names())) {
            Ok(names) => names,
            Err(payload) => {
                error!(
                    reason = %panic_message(payload.as_ref()),
                    "method registry accessor panicked; advertising no methods"
                );
                Vec::new()
            }
        };
        debug!(count = method_names.len(), module = MODULE_NAME, "bridge ready");

        Bridge {
            core,
            config,
            method_names,
        }
    }

    /// Forward `method` and `args` to the core.
    ///
    /// Resolves with the core's string untouched, or rejects with
    /// [`ERROR_CATEGORY`](crate::error::ERROR_CATEGORY) and the core's
    /// message. Panics inside the core are caught and reported the same way.
    pub fn invoke(&self, method: &str, args: &[String]) -> CallResult {
        debug!(method, args = args.len(), "invoke");

        let outcome = catch_unwind(AssertUnwindSafe(|| self.core.call_core(method, args)));
        let result = match outcome {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(err)) => err,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!(method, reason = %reason, "core panicked");
                if reason.is_empty() {
                    CoreError::Faulted
                } else {
                    CoreError::Failed(reason)
                }
            }
        };

        debug!(method, error = %result, "call rejected");
        Err(BridgeError::from(result))
    }

    /// Same as [`invoke`](Self::invoke), taking a prepared request.
    pub fn invoke_request(&self, request: &CallRequest) -> CallResult {
        self.invoke(&request.method, &request.arguments)
    }

    /// Normalize loosely typed arguments, then invoke.
    ///
    /// A non-string element rejects the call before the core is reached.
    pub fn invoke_json(&self, method: &str, arguments: &Value) -> CallResult {
        let request = CallRequest::from_json_arguments(method, arguments)?;
        self.invoke_request(&request)
    }

    /// Method names read from the core at construction.
    pub fn method_names(&self) -> &[String] {
        &self.method_names
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn core(&self) -> &C {
        &self.core
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::new()
    }
}
