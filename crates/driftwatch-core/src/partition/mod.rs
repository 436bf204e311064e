//! Artifact set partitioner.
//!
//! Joins two named artifact collections by exact, case-sensitive name
//! and produces the four-way partition driving review and bulk-export
//! decisions: missing / added / unchanged / modified, with modified
//! pairs carrying their full diff detail.
//!
//! ## Guarantees
//!
//! - **Determinism**: for a fixed pair of input collections the
//!   partition contents are identical on every run; nothing depends on
//!   filesystem, network, or map iteration order.
//! - **Reserved exclusion**: artifacts in the `Reserved` category are
//!   excluded from both sides entirely - neither counted nor compared.
//! - **Failure isolation**: a malformed artifact is reported and
//!   excluded; it never aborts the partition.

pub mod engine;
pub mod model;

pub use engine::partition_sets;
pub use model::{MappingFailure, Partition, Side};
