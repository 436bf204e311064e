//! Shape-tagged artifact collections.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::errors::{DwError, DwErrorKind};
use crate::model::raw::{RawArtifact, SourceShape};

/// A named collection of raw artifacts from one source, keyed by
/// artifact name.
///
/// Keys are exact, case-sensitive artifact names; `BTreeMap` keeps
/// every downstream walk independent of input order. The partitioner
/// takes collections by read-only reference; nothing here is mutated
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSet {
    /// Display label for the source (e.g. a server address or file name)
    pub label: String,
    /// Encoding shape shared by every record in the collection
    pub shape: SourceShape,
    /// Records keyed by artifact name
    pub artifacts: BTreeMap<String, RawArtifact>,
}

impl ArtifactSet {
    /// Create an empty collection.
    pub fn new(label: impl Into<String>, shape: SourceShape) -> Self {
        Self {
            label: label.into(),
            shape,
            artifacts: BTreeMap::new(),
        }
    }

    /// Build a collection from parsed records.
    ///
    /// Records that are not objects or lack a `name` are excluded and
    /// returned as per-record errors; the rest of the collection is
    /// still usable. When two records share a name, the later one wins
    /// (names are unique within a well-formed export).
    pub fn from_records(
        label: impl Into<String>,
        shape: SourceShape,
        records: Vec<Value>,
    ) -> (Self, Vec<DwError>) {
        let mut set = Self::new(label, shape);
        let mut failures = Vec::new();
        for (idx, record) in records.into_iter().enumerate() {
            let raw = match RawArtifact::from_value(record) {
                Ok(raw) => raw,
                Err(e) => {
                    failures.push(
                        DwError::new(DwErrorKind::InvalidArtifact)
                            .with_op("artifact_set_from_records")
                            .with_message(format!("record #{} is not usable", idx))
                            .with_source(e),
                    );
                    continue;
                }
            };
            match raw.require_name() {
                Ok(name) => {
                    set.artifacts.insert(name.to_string(), raw);
                }
                Err(_) => {
                    failures.push(
                        DwError::new(DwErrorKind::MissingField)
                            .with_op("artifact_set_from_records")
                            .with_message(format!("record #{} has no `name` field", idx)),
                    );
                }
            }
        }
        (set, failures)
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
