//! Partition computation.

use std::collections::BTreeSet;

use crate::diff::classify::classify_pair;
use crate::diff::model::{ClassifierConfig, DiffVerdict};
use crate::mapper::{map_artifact, MapperDiagnostics};
use crate::model::collection::ArtifactSet;
use crate::model::raw::RawArtifact;
use crate::partition::model::{MappingFailure, Partition, Side};
use crate::{log_op_end, log_op_start};

/// Partition two collections into missing / added / unchanged /
/// modified.
///
/// Reserved artifacts are excluded from both sides before the join.
/// Names present on one side only need no mapping; names present on
/// both sides are mapped to canonical form and classified. A mapping
/// failure on either side excludes that name from every bucket and is
/// reported on the partition instead - one bad artifact never aborts
/// the run.
///
/// The caller must not mutate the collections while this runs; both
/// are taken by read-only reference and the partition is assembled
/// into fresh owned collections.
pub fn partition_sets(
    left: &ArtifactSet,
    right: &ArtifactSet,
    config: &ClassifierConfig,
) -> Partition {
    log_op_start!(
        "partition_sets",
        left_len = left.len(),
        right_len = right.len(),
    );

    let left_names = comparable_names(left);
    let right_names = comparable_names(right);

    let mut partition = Partition::default();
    let mut diagnostics = MapperDiagnostics::new();

    for name in left_names.difference(&right_names) {
        partition.missing.insert((*name).to_string());
    }
    for name in right_names.difference(&left_names) {
        partition.added.insert((*name).to_string());
    }

    for name in left_names.intersection(&right_names) {
        let left_raw = &left.artifacts[*name];
        let right_raw = &right.artifacts[*name];

        let left_canonical = match map_side(left_raw, left, Side::Left, &mut diagnostics) {
            Ok(canonical) => canonical,
            Err(failure) => {
                partition.mapping_failures.push(failure);
                continue;
            }
        };
        let right_canonical = match map_side(right_raw, right, Side::Right, &mut diagnostics) {
            Ok(canonical) => canonical,
            Err(failure) => {
                partition.mapping_failures.push(failure);
                continue;
            }
        };

        let result = classify_pair(&left_canonical, &right_canonical, config);
        if result.verdict == DiffVerdict::Identical {
            partition.unchanged.insert((*name).to_string());
        } else {
            partition.modified.insert((*name).to_string(), result);
        }
    }

    partition.diagnostics = diagnostics;

    log_op_end!(
        "partition_sets",
        missing = partition.missing.len(),
        added = partition.added.len(),
        unchanged = partition.unchanged.len(),
        modified = partition.modified.len(),
    );
    partition
}

/// Names eligible for comparison: everything except Reserved artifacts.
fn comparable_names(set: &ArtifactSet) -> BTreeSet<&str> {
    set.artifacts
        .iter()
        .filter(|(_, raw)| !raw.is_reserved())
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Map one side of a pair, converting an error into its failure record.
fn map_side(
    raw: &RawArtifact,
    set: &ArtifactSet,
    side: Side,
    diagnostics: &mut MapperDiagnostics,
) -> Result<crate::model::canonical::CanonicalArtifact, MappingFailure> {
    map_artifact(raw, set.shape, diagnostics)
        .map_err(|e| MappingFailure::from_error(side, raw.name(), &e))
}
