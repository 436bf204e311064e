//! Export command: build a bulk-retrieval request from a report.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use driftwatch_core::export::{build_export_request, ArtifactKind};

use crate::report::ComparisonReport;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Comparison report produced by `driftwatch compare --report`
    #[arg(long)]
    pub report: PathBuf,

    /// Artifact kind for the request: sensor or package
    #[arg(long, default_value = "sensor")]
    pub kind: String,

    /// Comma-separated buckets to collect names from:
    /// missing, added, comments-only, substantive
    #[arg(long, default_value = "missing,substantive")]
    pub buckets: String,

    /// Write the request JSON to this path (stdout when omitted)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let kind: ArtifactKind = args.kind.parse()?;
    let text = fs::read_to_string(&args.report)
        .map_err(|e| format!("cannot read {}: {}", args.report.display(), e))?;
    let report: ComparisonReport = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not a comparison report: {}", args.report.display(), e))?;

    let mut names: Vec<String> = Vec::new();
    for bucket in args.buckets.split(',').map(str::trim) {
        match bucket {
            "missing" => names.extend(report.partition.missing.iter().cloned()),
            "added" => names.extend(report.partition.added.iter().cloned()),
            "comments-only" => names.extend(
                report
                    .partition
                    .comments_only()
                    .into_iter()
                    .map(str::to_string),
            ),
            "substantive" => names.extend(
                report
                    .partition
                    .substantive()
                    .into_iter()
                    .map(str::to_string),
            ),
            other => {
                return Err(format!(
                    "unknown bucket `{}` (expected missing, added, comments-only, substantive)",
                    other
                )
                .into())
            }
        }
    }

    let request = build_export_request(kind, names);
    if request.is_empty() {
        println!("Nothing to export for buckets `{}`", args.buckets);
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&request)?;
    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            println!(
                "Export request for {} artifact(s) written to {}",
                request.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
