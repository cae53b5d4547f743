use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use winbridge_core::errors::BridgeError;

/// Host -> adapter request.
///
/// `method` names the operation; `args` is a loosely-typed key/value bag
/// whose required keys depend on the method. Decoding into typed arguments
/// happens in [`crate::protocol::args`], not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }
}

/// Adapter -> host reply.
///
/// Successful operations answer with nothing, a boolean, a string, or a
/// small map (`getBounds`). Failures carry the error's stable code plus a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MethodReply {
    #[serde(rename = "ok")]
    Ok {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },

    #[serde(rename = "error")]
    Error { code: String, message: String },
}

impl MethodReply {
    /// Successful reply carrying no value.
    pub fn empty() -> Self {
        MethodReply::Ok { value: None }
    }

    /// Successful reply carrying a value.
    pub fn value(value: impl Into<Value>) -> Self {
        MethodReply::Ok {
            value: Some(value.into()),
        }
    }

    /// Failure reply from any bridge error.
    pub fn failure(error: &dyn BridgeError) -> Self {
        MethodReply::Error {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, MethodReply::Ok { .. })
    }
}
