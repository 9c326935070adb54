//! Error types for the bridge.
//!
//! Two layers: [`CoreError`] is what a native core reports, and
//! [`BridgeError`] is the flattened `{category, message}` descriptor that
//! crosses back into managed code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category label attached to every rejected call.
pub const ERROR_CATEGORY: &str = "MyMoneroError";

/// Message used when the core faults without a usable message.
pub const CORE_FAULT_MESSAGE: &str = "mymonero-core-cpp threw an exception";

/// Failure raised by a native core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No entry point is registered under this name.
    #[error("No mymonero-core-cpp method {0}")]
    UnknownMethod(String),

    /// The entry point ran and reported an error.
    #[error("{0}")]
    Failed(String),

    /// The entry point faulted without a message.
    #[error("mymonero-core-cpp threw an exception")]
    Faulted,
}

/// Errors from loading a [`BridgeConfig`](crate::config::BridgeConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure descriptor handed back to managed code.
///
/// Serializes as `{"category": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeError {
    pub category: String,
    pub message: String,
}

impl BridgeError {
    /// Build a descriptor under [`ERROR_CATEGORY`].
    pub fn new(message: impl Into<String>) -> Self {
        BridgeError {
            category: ERROR_CATEGORY.to_string(),
            message: message.into(),
        }
    }

    /// Rejection for a positional argument that is not a string.
    pub fn non_string_argument(index: usize, found: &str) -> Self {
        Self::new(format!("argument {} is not a string (found {})", index, found))
    }

    /// Rejection for an arguments value that is not an array.
    pub fn arguments_not_array() -> Self {
        Self::new("arguments must be an array")
    }
}

impl core::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

impl std::error::Error for BridgeError {}

impl From<CoreError> for BridgeError {
    fn from(err: CoreError) -> Self {
        BridgeError::new(err.to_string())
    }
}
