//! Registration shim for host frameworks.
//!
//! Hosts own the module lifecycle. They ask a [`ModulePackage`] for its
//! modules, address each one by [`NativeModule::name`], read its constants
//! once, and dispatch calls to the operations it declares.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bridge::Bridge;
use crate::call::CallResult;
use crate::config::BridgeConfig;
use crate::native::NativeCore;

/// Name the bridge registers under.
pub const MODULE_NAME: &str = "MyMoneroCore";

/// Operations a bridge module exposes to managed code.
///
/// `callMyMonero` is the historical name of `invoke`.
pub const OPERATIONS: &[&str] = &["invoke", "callMyMonero"];

/// Constants read once when the host loads the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConstants {
    pub method_names: Vec<String>,
}

/// A module the host can register and call into.
pub trait NativeModule {
    /// Registry name.
    fn name(&self) -> &str;

    /// Load-time constants.
    fn constants(&self) -> ModuleConstants;

    /// Names of callable operations.
    fn operations(&self) -> &'static [&'static str] {
        OPERATIONS
    }

    /// Dispatch a call to this module.
    fn invoke(&self, method: &str, args: &[String]) -> CallResult;
}

/// Factory the host drives to discover modules.
pub trait ModulePackage {
    fn create_native_modules(&self) -> Vec<Box<dyn NativeModule>>;
}

/// The MyMonero bridge as a registrable module.
pub struct MyMoneroModule<C> {
    bridge: Bridge<C>,
}

impl<C: NativeCore> MyMoneroModule<C> {
    pub fn new(bridge: Bridge<C>) -> Self {
        MyMoneroModule { bridge }
    }

    pub fn bridge(&self) -> &Bridge<C> {
        &self.bridge
    }
}

impl<C: NativeCore> NativeModule for MyMoneroModule<C> {
    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn constants(&self) -> ModuleConstants {
        ModuleConstants {
            method_names: self.bridge.method_names().to_vec(),
        }
    }

    fn invoke(&self, method: &str, args: &[String]) -> CallResult {
        self.bridge.invoke(method, args)
    }
}

/// Package holding one shared core; each module it creates wraps that core.
pub struct MyMoneroPackage<C: ?Sized> {
    core: Arc<C>,
    config: BridgeConfig,
}

impl<C: NativeCore + ?Sized + 'static> MyMoneroPackage<C> {
    pub fn new(core: Arc<C>) -> Self {
        Self::with_config(core, BridgeConfig::default())
    }

    pub fn with_config(core: Arc<C>, config: BridgeConfig) -> Self {
        MyMoneroPackage { core, config }
    }
}

impl<C: NativeCore + ?Sized + 'static> ModulePackage for MyMoneroPackage<C> {
    fn create_native_modules(&self) -> Vec<Box<dyn NativeModule>> {
        let bridge = Bridge::with_config(Arc::clone(&self.core), self.config.clone());
        vec![Box::new(MyMoneroModule::new(bridge))]
    }
}
