//! Export selection builder.
//!
//! Collects artifact names from one or more partition buckets into the
//! request payload handed to the bulk-retrieval collaborator. Requests
//! carry exactly one artifact kind: sensors and packages are never
//! mixed in one request.

use serde::{Deserialize, Serialize};

use crate::errors::{DwError, DwErrorKind, Result};

/// The kind of artifact a request retrieves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Query/sensor definitions
    Sensor,
    /// Deployable packages
    Package,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Sensor => write!(f, "sensor"),
            ArtifactKind::Package => write!(f, "package"),
        }
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = DwError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sensor" => Ok(ArtifactKind::Sensor),
            "package" => Ok(ArtifactKind::Package),
            other => Err(DwError::new(DwErrorKind::InvalidReport)
                .with_op("parse_artifact_kind")
                .with_message(format!("unknown artifact kind `{}`", other))),
        }
    }
}

/// A bulk-retrieval request for one artifact kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportRequest {
    /// The single kind this request covers
    pub kind: ArtifactKind,
    /// Names to retrieve, sorted and deduplicated
    pub include: Vec<String>,
}

impl ExportRequest {
    /// True when there is nothing to export; callers should recognize
    /// this instead of sending the request.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    /// Number of names in the request.
    pub fn len(&self) -> usize {
        self.include.len()
    }
}

/// Build an export request from a name selection.
///
/// Pure and idempotent: names are sorted and deduplicated, so the same
/// selection in any order (or given twice) yields the same request.
pub fn build_export_request<I, S>(kind: ArtifactKind, names: I) -> ExportRequest
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut include: Vec<String> = names.into_iter().map(Into::into).collect();
    include.sort();
    include.dedup();
    ExportRequest { kind, include }
}
