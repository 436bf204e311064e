//! Partition output types.
//!
//! Collections use `BTreeMap`/`BTreeSet` for deterministic iteration
//! and serialization; the whole partition rides inside comparison
//! reports unchanged.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::diff::model::{DiffResult, DiffVerdict};
use crate::errors::DwError;
use crate::mapper::MapperDiagnostics;

/// Which input collection an entry refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first (reference) collection
    Left,
    /// The second (candidate) collection
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A per-artifact mapping failure.
///
/// The failed artifact is excluded from its collection and reported
/// here; partitioning continues for the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingFailure {
    /// Collection the artifact came from
    pub side: Side,
    /// Artifact name, when one was available
    pub name: Option<String>,
    /// Stable error code
    pub code: String,
    /// Human-readable error detail
    pub message: String,
}

impl MappingFailure {
    /// Build a failure record from a facility error.
    pub fn from_error(side: Side, name: Option<&str>, error: &DwError) -> Self {
        Self {
            side,
            name: name.map(str::to_string),
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// The four-way partition over the union of both input collections.
///
/// Every non-Reserved name from either side appears in exactly one of
/// the four sets (unless its mapping failed, in which case it appears
/// only in `mapping_failures`). All sub-collections are populated even
/// when empty so downstream processing stays uniform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Partition {
    /// Names present in left, absent in right
    pub missing: BTreeSet<String>,
    /// Names present in right, absent in left
    pub added: BTreeSet<String>,
    /// Names present in both with identical canonical forms
    pub unchanged: BTreeSet<String>,
    /// Names present in both with differing canonical forms, keyed to
    /// their full diff detail (verdict + segments)
    pub modified: BTreeMap<String, DiffResult>,
    /// Per-artifact failures; these names are in no bucket
    pub mapping_failures: Vec<MappingFailure>,
    /// Enum-fallback counters aggregated across both sides
    pub diagnostics: MapperDiagnostics,
}

impl Partition {
    /// Names whose modification is comments-only.
    pub fn comments_only(&self) -> Vec<&str> {
        self.modified_with_verdict(DiffVerdict::CommentsOnly)
    }

    /// Names whose modification is substantive.
    pub fn substantive(&self) -> Vec<&str> {
        self.modified_with_verdict(DiffVerdict::Substantive)
    }

    fn modified_with_verdict(&self, verdict: DiffVerdict) -> Vec<&str> {
        self.modified
            .iter()
            .filter(|(_, result)| result.verdict == verdict)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Total number of classified names across all four sets.
    pub fn classified_len(&self) -> usize {
        self.missing.len() + self.added.len() + self.unchanged.len() + self.modified.len()
    }
}
