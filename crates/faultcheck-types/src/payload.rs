use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The structured error body returned by the data store.
///
/// Equality checks go through [`ErrorPayload::to_json`], which produces a
/// canonical form: fields in declaration order, extra properties sorted by
/// key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_error_info: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl ErrorPayload {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Attach an extra property to the payload.
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Canonical JSON form used for equality comparison.
    pub fn to_json(&self) -> Result<String, TypeError> {
        serde_json::to_string(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Parse a payload from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, TypeError> {
        serde_json::from_str(json).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}
