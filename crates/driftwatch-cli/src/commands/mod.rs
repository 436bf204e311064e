pub mod canon;
pub mod compare;
pub mod export;

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Read a collection export file: a JSON array of artifact records,
/// or an object wrapping the array under `artifacts`.
pub fn read_records(path: &Path) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let parsed: Value = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not valid JSON: {}", path.display(), e))?;
    match parsed {
        Value::Array(records) => Ok(records),
        Value::Object(mut obj) => match obj.remove("artifacts") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(format!(
                "{} must be a JSON array of artifacts (or wrap one under `artifacts`)",
                path.display()
            )
            .into()),
        },
        _ => Err(format!(
            "{} must be a JSON array of artifacts",
            path.display()
        )
        .into()),
    }
}

/// Display label for a collection file.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
