//! Raw artifact records as returned by a source.
//!
//! A raw artifact is a self-describing record (field-name/value pairs)
//! in one of two known shapes: the management-server query endpoint
//! shape or the bulk content-bundle shape. The record is held as parsed
//! JSON and read through tolerant typed accessors; the canonical schema
//! is a fixed allow-list, so unknown fields are simply never read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{DwError, DwErrorKind, Result};

/// Artifacts in this category are excluded from comparison entirely.
pub const RESERVED_CATEGORY: &str = "Reserved";

/// The two known source encodings of a raw artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceShape {
    /// Field names and value encodings as returned by a management-server
    /// query endpoint (`value_type`, `max_age_seconds`, flat child lists)
    Server,
    /// Field names and encodings as found in a bulk content-export bundle
    /// (`result_type`, `qseconds`, XML-derived wrapped child lists)
    Bundle,
}

impl std::fmt::Display for SourceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceShape::Server => write!(f, "server"),
            SourceShape::Bundle => write!(f, "bundle"),
        }
    }
}

impl std::str::FromStr for SourceShape {
    type Err = DwError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "server" => Ok(SourceShape::Server),
            "bundle" => Ok(SourceShape::Bundle),
            other => Err(DwError::new(DwErrorKind::InvalidArtifact)
                .with_op("parse_source_shape")
                .with_message(format!("unknown source shape `{}`", other))),
        }
    }
}

/// A single artifact as it arrived from a source, prior to mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArtifact {
    fields: Map<String, Value>,
}

impl RawArtifact {
    /// Wrap a parsed JSON value as a raw artifact record.
    ///
    /// # Errors
    /// * `InvalidArtifact` - the value is not a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DwError::new(DwErrorKind::InvalidArtifact)
                .with_op("raw_artifact_from_value")
                .with_message(format!(
                    "artifact record must be a JSON object, got {}",
                    json_type_name(&other)
                ))),
        }
    }

    /// The artifact name, if the record carries one.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// The artifact name, or a `MissingField` error.
    pub fn require_name(&self) -> Result<&str> {
        self.name().ok_or_else(|| {
            DwError::new(DwErrorKind::MissingField)
                .with_op("require_name")
                .with_message("required field `name` is absent or not a string")
        })
    }

    /// The artifact category; absent → empty string.
    pub fn category(&self) -> &str {
        self.fields
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// True when the category marks this artifact as excluded from comparison.
    pub fn is_reserved(&self) -> bool {
        self.category() == RESERVED_CATEGORY
    }

    /// Raw access to a field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A field as a string: strings pass through, numbers render in
    /// base 10. Other value types are treated as absent.
    pub fn string_field(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_to_string)
    }

    /// A field as an integer: numbers pass through, strings of digits
    /// parse. Other value types are treated as absent.
    pub fn integer_field(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(value_to_i64)
    }
}

/// Coerce a scalar JSON value to a string.
pub fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a JSON value to an integer, accepting numeric strings.
pub fn value_to_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
