//! Canon command: persist canonical records for one collection.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use driftwatch_core::mapper::{map_artifact, MapperDiagnostics};
use driftwatch_core::model::{ArtifactSet, SourceShape};
use driftwatch_core::serialize::{canonical_text, content_digest};

use super::{file_label, read_records};

#[derive(Debug, Args)]
pub struct CanonArgs {
    /// Collection file - a JSON array of artifacts
    #[arg(long)]
    pub input: PathBuf,

    /// Shape of the file: server or bundle
    #[arg(long, default_value = "server")]
    pub shape: String,

    /// Directory receiving one canonical record file per artifact
    #[arg(long)]
    pub out_dir: PathBuf,
}

pub fn execute(args: CanonArgs) -> Result<(), Box<dyn std::error::Error>> {
    let shape: SourceShape = args.shape.parse()?;
    let (set, load_failures) =
        ArtifactSet::from_records(file_label(&args.input), shape, read_records(&args.input)?);
    for failure in &load_failures {
        eprintln!("Warning: {}", failure);
    }

    fs::create_dir_all(&args.out_dir)?;

    let mut diagnostics = MapperDiagnostics::new();
    let mut written = 0usize;
    for (name, raw) in &set.artifacts {
        let canonical = match map_artifact(raw, shape, &mut diagnostics) {
            Ok(canonical) => canonical,
            Err(e) => {
                eprintln!("Warning: skipping `{}`: {}", name, e);
                continue;
            }
        };
        let text = canonical_text(&canonical)?;
        let digest = content_digest(&canonical)?;
        let path = args.out_dir.join(format!("{}.json", file_stem(name)));
        fs::write(&path, text)?;
        println!("{}  {}", digest, name);
        written += 1;
    }

    if diagnostics.total_fallbacks() > 0 {
        eprintln!(
            "Warning: {} enum value(s) fell back to default codes",
            diagnostics.total_fallbacks()
        );
    }
    println!("{} canonical record(s) written to {}", written, args.out_dir.display());
    Ok(())
}

/// Artifact names may contain path separators and other characters
/// unfit for file names; everything outside a safe set becomes `_`.
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
