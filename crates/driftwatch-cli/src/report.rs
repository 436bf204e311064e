//! Comparison report envelope.
//!
//! Wraps the pure partition output with run correlation and source
//! labels; this is the JSON document `compare` writes and `export`
//! reads back.

use chrono::{DateTime, Utc};
use driftwatch_core::model::SourceShape;
use driftwatch_core::partition::Partition;
use driftwatch_core_types::RunId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Correlation id for this comparison run
    pub run_id: RunId,
    /// Wall-clock time the report was produced (envelope only; the
    /// partition itself is fully deterministic)
    pub generated_at: DateTime<Utc>,
    /// Label of the left (reference) collection
    pub left_label: String,
    /// Shape of the left collection
    pub left_shape: SourceShape,
    /// Label of the right (candidate) collection
    pub right_label: String,
    /// Shape of the right collection
    pub right_shape: SourceShape,
    /// The four-way partition with per-pair diff detail
    pub partition: Partition,
}
