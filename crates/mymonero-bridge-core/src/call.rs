//! Per-invocation request and result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BridgeError;

/// Outcome of a single bridge call.
pub type CallResult = Result<String, BridgeError>;

/// A method name plus its positional string arguments.
///
/// The method is never rewritten and the argument order is kept exactly as
/// supplied; the core may be positionally sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    pub method: String,
    pub arguments: Vec<String>,
}

impl CallRequest {
    pub fn new(method: impl Into<String>, arguments: Vec<String>) -> Self {
        CallRequest {
            method: method.into(),
            arguments,
        }
    }

    /// Build a request from loosely typed host values.
    ///
    /// Every element must already be a JSON string. The first element that
    /// is not rejects the whole request; nothing is coerced.
    pub fn from_json_values(method: impl Into<String>, values: &[Value]) -> Result<Self, BridgeError> {
        let arguments = values
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::String(s) => Ok(s.clone()),
                other => Err(BridgeError::non_string_argument(index, json_type_name(other))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(method, arguments))
    }

    /// Same as [`from_json_values`](Self::from_json_values), but `arguments`
    /// must itself be a JSON array.
    pub fn from_json_arguments(method: impl Into<String>, arguments: &Value) -> Result<Self, BridgeError> {
        match arguments {
            Value::Array(values) => Self::from_json_values(method, values),
            _ => Err(BridgeError::arguments_not_array()),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
