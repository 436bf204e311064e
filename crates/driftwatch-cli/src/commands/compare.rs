//! Compare command: partition two collection exports.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use driftwatch_core::diff::ClassifierConfig;
use driftwatch_core::model::{ArtifactSet, SourceShape};
use driftwatch_core::partition::partition_sets;
use driftwatch_core::render::render_partition_summary;
use driftwatch_core_types::RunId;

use super::{file_label, read_records};
use crate::report::ComparisonReport;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Left (reference) collection file - a JSON array of artifacts
    #[arg(long)]
    pub left: PathBuf,

    /// Right (candidate) collection file
    #[arg(long)]
    pub right: PathBuf,

    /// Shape of the left file: server or bundle
    #[arg(long, default_value = "server")]
    pub left_shape: String,

    /// Shape of the right file: server or bundle
    #[arg(long, default_value = "server")]
    pub right_shape: String,

    /// Write the JSON comparison report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the Markdown summary even when a report is written
    #[arg(long)]
    pub summary: bool,

    /// Use the lenient comments-only rule (no quote/comma stripping)
    #[arg(long)]
    pub lenient: bool,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let left_shape: SourceShape = args.left_shape.parse()?;
    let right_shape: SourceShape = args.right_shape.parse()?;

    let (left_set, left_failures) =
        ArtifactSet::from_records(file_label(&args.left), left_shape, read_records(&args.left)?);
    let (right_set, right_failures) = ArtifactSet::from_records(
        file_label(&args.right),
        right_shape,
        read_records(&args.right)?,
    );
    for failure in left_failures.iter().chain(right_failures.iter()) {
        eprintln!("Warning: {}", failure);
    }

    let config = ClassifierConfig {
        strict: !args.lenient,
    };
    let partition = partition_sets(&left_set, &right_set, &config);

    let report = ComparisonReport {
        run_id: RunId::new(),
        generated_at: Utc::now(),
        left_label: left_set.label.clone(),
        left_shape,
        right_label: right_set.label.clone(),
        right_shape,
        partition,
    };

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)?;
        println!("Report written to {}", path.display());
    }

    if args.summary || args.report.is_none() {
        print!(
            "{}",
            render_partition_summary(&report.partition, &report.left_label, &report.right_label)
        );
    }

    Ok(())
}
