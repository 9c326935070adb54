//! Host-independent call bridge into the MyMonero wallet core.
//!
//! Managed code names a core method and passes positional string arguments;
//! the bridge forwards them across the foreign-function boundary and hands
//! back the core's JSON string, or a `{category, message}` failure.
//!
//! This crate provides:
//! - The consumed core boundary ([`NativeCore`]) and an in-process
//!   implementation ([`MethodTable`])
//! - The bridge itself, with panic containment and error normalization
//! - A registration shim for host frameworks ([`ModulePackage`])

pub mod bridge;
pub mod call;
pub mod config;
pub mod error;
pub mod module;
pub mod native;

pub use bridge::Bridge;
pub use call::{CallRequest, CallResult};
pub use config::BridgeConfig;
pub use error::{BridgeError, ConfigError, CoreError, ERROR_CATEGORY};
pub use module::{ModuleConstants, ModulePackage, MyMoneroModule, MyMoneroPackage, NativeModule, MODULE_NAME};
pub use native::{MethodTable, NativeCore};
