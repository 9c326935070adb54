//! The foreign-function boundary the bridge calls into.
//!
//! [`NativeCore`] is the consumed interface: one entry point that runs a named
//! method, and one accessor that lists the names it understands. Bindings
//! adapt whatever the host offers (a JS object, a linked library) to this
//! trait. [`MethodTable`] is an in-process implementation backed by an ordered
//! name-to-handler table.

use std::sync::Arc;

use crate::error::CoreError;

/// Native core entry point plus its method registry accessor.
pub trait NativeCore {
    /// Run `method` with positional string arguments.
    fn call_core(&self, method: &str, args: &[String]) -> Result<String, CoreError>;

    /// Every method name the core supports, in the core's own order.
    fn list_method_names(&self) -> Vec<String>;
}

impl<T: NativeCore + ?Sized> NativeCore for Arc<T> {
    fn call_core(&self, method: &str, args: &[String]) -> Result<String, CoreError> {
        (**self).call_core(method, args)
    }

    fn list_method_names(&self) -> Vec<String> {
        (**self).list_method_names()
    }
}

impl<T: NativeCore + ?Sized> NativeCore for Box<T> {
    fn call_core(&self, method: &str, args: &[String]) -> Result<String, CoreError> {
        (**self).call_core(method, args)
    }

    fn list_method_names(&self) -> Vec<String> {
        (**self).list_method_names()
    }
}

/// Handler signature for a table entry.
pub type MethodHandler = Box<dyn Fn(&[String]) -> Result<String, CoreError> + Send + Sync>;

/// Ordered name-to-handler registry.
///
/// Lookup is an exact, case-sensitive match on the name.
#[derive(Default)]
pub struct MethodTable {
    entries: Vec<(String, MethodHandler)>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, builder style.
    pub fn with_method<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[String]) -> Result<String, CoreError> + Send + Sync + 'static,
    {
        self.register(name, handler);
        self
    }

    /// Register `handler` under `name`.
    ///
    /// Re-registering a name swaps the handler but keeps its position.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&[String]) -> Result<String, CoreError> + Send + Sync + 'static,
    {
        let name = name.into();
        let handler: MethodHandler = Box::new(handler);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = handler,
            None => self.entries.push((name, handler)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }
}

impl NativeCore for MethodTable {
    fn call_core(&self, method: &str, args: &[String]) -> Result<String, CoreError> {
        let (_, handler) = self
            .entries
            .iter()
            .find(|(name, _)| name == method)
            .ok_or_else(|| CoreError::UnknownMethod(method.to_string()))?;
        handler(args)
    }

    fn list_method_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl core::fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.list_method_names())
            .finish()
    }
}
