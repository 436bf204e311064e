//! Human-readable summary renderer for partitions.

use crate::partition::model::Partition;

/// Render a human-readable Markdown/text summary of a [`Partition`].
///
/// The summary is intended for review workflows; it is informational
/// only and does not affect the structured partition.
pub fn render_partition_summary(
    partition: &Partition,
    left_label: &str,
    right_label: &str,
) -> String {
    let mut out = String::new();

    // Header
    out.push_str("## Content Comparison\n\n");
    out.push_str(&format!(
        "**Left**: {}  \n**Right**: {}\n\n",
        left_label, right_label
    ));

    // Counts
    let comments_only = partition.comments_only().len();
    let substantive = partition.substantive().len();
    out.push_str(&format!(
        "| Bucket | Count |\n\
         |---|---|\n\
         | Missing | {} |\n\
         | Added | {} |\n\
         | Unchanged | {} |\n\
         | Modified (comments only) | {} |\n\
         | Modified (substantive) | {} |\n\n",
        partition.missing.len(),
        partition.added.len(),
        partition.unchanged.len(),
        comments_only,
        substantive,
    ));

    if partition.classified_len() == partition.unchanged.len()
        && partition.mapping_failures.is_empty()
    {
        out.push_str("_No drift detected._\n");
        return out;
    }

    // Buckets
    if !partition.missing.is_empty() {
        out.push_str("### Missing (left only)\n\n");
        for name in &partition.missing {
            out.push_str(&format!("- `{}`\n", name));
        }
        out.push('\n');
    }

    if !partition.added.is_empty() {
        out.push_str("### Added (right only)\n\n");
        for name in &partition.added {
            out.push_str(&format!("- `{}`\n", name));
        }
        out.push('\n');
    }

    if !partition.modified.is_empty() {
        out.push_str("### Modified\n\n");
        for (name, result) in &partition.modified {
            let label = match result.verdict {
                crate::diff::model::DiffVerdict::CommentsOnly => "comments only",
                _ => "substantive",
            };
            let differing = result
                .segments
                .iter()
                .filter(|s| s.op != crate::diff::model::DiffOp::Equal)
                .count();
            out.push_str(&format!(
                "- `{}` ({}, {} differing segment{})\n",
                name,
                label,
                differing,
                if differing == 1 { "" } else { "s" }
            ));
            if let Some(error) = &result.error {
                out.push_str(&format!("  - serialization error: {}\n", error));
            }
        }
        out.push('\n');
    }

    // Mapping failures
    if !partition.mapping_failures.is_empty() {
        out.push_str("### Mapping Failures\n\n");
        for failure in &partition.mapping_failures {
            out.push_str(&format!(
                "- [{}] `{}`: {}\n",
                failure.side,
                failure.name.as_deref().unwrap_or("<unnamed>"),
                failure.message
            ));
        }
        out.push('\n');
    }

    // Enum fallbacks
    if !partition.diagnostics.is_empty() {
        out.push_str("### Enum Fallbacks\n\n");
        for (token, count) in &partition.diagnostics.unknown_value_types {
            out.push_str(&format!("- value type `{}` seen {} time(s)\n", token, count));
        }
        for (token, count) in &partition.diagnostics.unknown_platforms {
            out.push_str(&format!("- platform `{}` seen {} time(s)\n", token, count));
        }
        out.push('\n');
    }

    out
}
