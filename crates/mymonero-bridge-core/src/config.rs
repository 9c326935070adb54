//! Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings a host may pass when constructing the bridge.
///
/// The registry name and the rejection category are fixed and not part of
/// the config. Every field is optional in the serialized form:
///
/// ```json
/// { "logCalls": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Echo each call to the host console (method name and argument count only).
    pub log_calls: bool,
}

impl BridgeConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
