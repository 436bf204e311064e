//! Driftwatch Core - canonicalization and differential classification
//!
//! This crate provides the pure comparison engine for management-server
//! content, including:
//! - Raw artifact records in the two known source shapes (server query
//!   endpoint and bulk content bundle)
//! - The canonical schema mapper collapsing both shapes into one
//!   comparable record form
//! - Text normalization and deterministic sort helpers
//! - The line-level diff classifier (identical / comments-only /
//!   substantive)
//! - The artifact set partitioner (missing / added / unchanged /
//!   modified)
//! - The export selection builder for bulk retrieval requests
//!
//! Everything here is synchronous, pure, and CPU-bound; network
//! retrieval, credentials, and file enumeration live in external
//! collaborators.

pub mod diff;
pub mod errors;
pub mod export;
pub mod logging_facility;
pub mod mapper;
pub mod model;
pub mod normalize;
pub mod partition;
pub mod render;
pub mod serialize;

// Re-export commonly used types
pub use diff::{classify_pair, ClassifierConfig, DiffResult, DiffSegment, DiffVerdict};
pub use errors::{DwError, DwErrorKind, Result};
pub use export::{build_export_request, ArtifactKind, ExportRequest};
pub use mapper::{map_artifact, MapperDiagnostics};
pub use model::{ArtifactSet, CanonicalArtifact, RawArtifact, SourceShape};
pub use partition::{partition_sets, Partition};
pub use render::render_partition_summary;
