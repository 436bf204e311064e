//! Canonical artifact records.
//!
//! The canonical form is the shape-independent representation every raw
//! artifact maps into before comparison. Two invariants make the form
//! comparable field-for-field:
//!
//! - **Deterministic presence**: optional fields are omitted entirely
//!   when empty or absent in the source, never emitted as empty
//!   string/null, so "absent" and "present but empty" canonicalize
//!   identically.
//! - **Deterministic order**: fields serialize in declaration order,
//!   multi-valued children are sorted by a total key before emission.
//!
//! A canonical record is built once per raw artifact, is immutable, and
//! is consumed only for serialization and comparison.

use serde::{Deserialize, Serialize};

/// The normalized, shape-independent representation of one artifact.
///
/// Field declaration order here *is* the serialization order; the diff
/// classifier relies on it being independent of map iteration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalArtifact {
    /// Artifact name, unique within a collection, case-sensitive
    pub name: String,
    /// Category string (empty when the source carried none)
    pub category: String,
    /// Value-type code resolved through the shared value-type table
    pub result_type: i64,
    /// Content hash, always numeric even when the source encodes a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<i64>,
    /// Refresh interval in seconds (`max_age_seconds` / `qseconds`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<i64>,
    /// Case-insensitivity flag, always an explicit 0 or 1
    pub ignore_case_flag: i64,
    /// Present (as 1) only when the artifact is hidden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_flag: Option<i64>,
    /// Result delimiter, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Description as normalized lines, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
    /// Owning content set, reduced to its name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_set: Option<ContentSetRef>,
    /// Per-platform query definitions, sorted by
    /// `(platform, script, signature)` ascending
    pub queries: Vec<PlatformQuery>,
    /// Parameter definitions, omitted when the source list is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterSpec>>,
    /// Column definitions, omitted when the source list is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcolumns: Option<Vec<SubcolumnSpec>>,
    /// Key/value metadata, sorted by `(name, value)`, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetaEntry>>,
}

/// One per-platform query definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlatformQuery {
    /// Platform code resolved through the shared platform table
    pub platform: i64,
    /// Query body as normalized lines
    pub script: Vec<String>,
    /// Signature; empty string when absent or the literal `"null"`
    pub signature: String,
}

/// One parameter definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter variable name
    pub varname: String,
    /// Default or fixed value
    pub value: String,
    /// Parameter type, included only when the source provides one
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
}

/// One column definition.
///
/// The source-side "exclude from parse" marker is internal-only and is
/// never copied here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubcolumnSpec {
    /// Column name
    pub name: String,
    /// Zero-based column position
    pub column_index: i64,
    /// Hidden flag as an explicit 0 or 1
    pub hidden_flag: i64,
    /// Case-insensitivity flag as an explicit 0 or 1
    pub ignore_case_flag: i64,
    /// Value-type code resolved through the shared value-type table
    pub result_type: i64,
}

/// Reference to the content set an artifact belongs to.
///
/// Only the name survives canonicalization; other content-set metadata
/// is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentSetRef {
    /// Content set name
    pub name: String,
}

/// One key/value metadata entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct MetaEntry {
    /// Metadata key
    pub name: String,
    /// Metadata value
    pub value: String,
}
