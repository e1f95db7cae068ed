//! JSON document wrapper.
//!
//! The document owns its value tree outright. Dropping it releases the
//! backing storage, on success and error paths alike.

use std::fmt;

use serde_json::Value;

use crate::error::{ReadError, ReadResult};
use crate::format::Format;

/// A parsed JSON value tree.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Property of the root object, if the root is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// RFC 6901 lookup, e.g. `/items/0/name`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.root.pointer(pointer)
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

impl From<Value> for JsonDocument {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl fmt::Display for JsonDocument {
    /// Pretty-printed with two-space indentation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.root)
    }
}

/// Parses `text` as a single JSON value.
pub fn parse_json(text: &str) -> ReadResult<JsonDocument> {
    serde_json::from_str::<Value>(text)
        .map(JsonDocument::from)
        .map_err(|e| ReadError::parse(Format::Json, e))
}
