//! Canonical schema mapper.
//!
//! Maps a raw artifact record (in either of the two known source
//! shapes) into one canonical record so the two can be compared
//! field-for-field. The mapping is pure and total on well-formed
//! input: the canonical schema is a fixed allow-list, unknown fields
//! are silently dropped, and unrecognized enum names resolve to
//! documented default codes instead of erroring. The only per-artifact
//! failure is a record without a `name`.
//!
//! Each canonical field has one fixed builder function below; the two
//! shape front-ends ([`server`]/[`bundle`]) only decide *where* in the
//! raw record a field's value lives, never *how* it normalizes.

pub mod codes;

mod bundle;
mod server;

use serde_json::{Map, Value};

use crate::errors::Result;
use crate::model::canonical::{
    CanonicalArtifact, ContentSetRef, MetaEntry, ParameterSpec, PlatformQuery, SubcolumnSpec,
};
use crate::model::raw::{value_to_i64, value_to_string, RawArtifact, SourceShape};
use crate::normalize::{normalize_flag, normalize_lines, sort_meta_entries, sort_platform_queries};

pub use codes::MapperDiagnostics;

/// Map a raw artifact into its canonical form.
///
/// # Errors
/// * `MissingField` - the record has no `name`
pub fn map_artifact(
    raw: &RawArtifact,
    shape: SourceShape,
    diag: &mut MapperDiagnostics,
) -> Result<CanonicalArtifact> {
    raw.require_name()?;
    match shape {
        SourceShape::Server => server::map(raw, diag),
        SourceShape::Bundle => bundle::map(raw, diag),
    }
}

// ---------------------------------------------------------------------------
// Per-field builders shared by both shapes
// ---------------------------------------------------------------------------

/// Free text as normalized lines; `None` when absent or empty.
///
/// Accepts a plain string or an already-line-split array of strings
/// (the canonical form itself), which keeps mapping idempotent when a
/// canonical record is re-fed through the server shape.
fn text_lines(v: Option<&Value>) -> Option<Vec<String>> {
    let lines = match v {
        Some(Value::String(s)) => normalize_lines(s),
        Some(Value::Array(items)) => items.iter().filter_map(value_to_string).collect(),
        _ => Vec::new(),
    };
    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

/// A string field that is omitted when absent or empty.
fn optional_string(v: Option<&Value>) -> Option<String> {
    v.and_then(value_to_string).filter(|s| !s.is_empty())
}

/// Hidden flag: present (as 1) only when true.
fn hidden_flag(v: Option<&Value>) -> Option<i64> {
    if normalize_flag(v) == 1 {
        Some(1)
    } else {
        None
    }
}

/// Content hash: always numeric in canonical form; an unparseable
/// value is omitted rather than erroring.
fn numeric_hash(v: Option<&Value>) -> Option<i64> {
    v.and_then(value_to_i64)
}

/// Query signature: empty string when absent or the literal `"null"`.
fn signature_value(v: Option<&Value>) -> String {
    match v.and_then(value_to_string) {
        Some(s) if s != "null" => s,
        _ => String::new(),
    }
}

/// One per-platform query entry.
fn query_entry(obj: &Map<String, Value>, diag: &mut MapperDiagnostics) -> PlatformQuery {
    PlatformQuery {
        platform: codes::resolve_platform(obj.get("platform"), diag),
        script: text_lines(obj.get("script")).unwrap_or_default(),
        signature: signature_value(obj.get("signature")),
    }
}

/// Assemble and sort the canonical query list from raw entry objects.
fn query_list(entries: &[&Value], diag: &mut MapperDiagnostics) -> Vec<PlatformQuery> {
    let mut queries: Vec<PlatformQuery> = entries
        .iter()
        .filter_map(|v| v.as_object())
        .map(|obj| query_entry(obj, diag))
        .collect();
    sort_platform_queries(&mut queries);
    queries
}

/// One parameter definition; entries without a `varname` are dropped.
fn parameter_spec(obj: &Map<String, Value>) -> Option<ParameterSpec> {
    let varname = obj.get("varname").and_then(value_to_string)?;
    Some(ParameterSpec {
        varname,
        value: obj.get("value").and_then(value_to_string).unwrap_or_default(),
        param_type: optional_string(obj.get("type")),
    })
}

/// Assemble the canonical parameter list; `None` when empty.
fn parameter_list(entries: &[&Value]) -> Option<Vec<ParameterSpec>> {
    let parameters: Vec<ParameterSpec> = entries
        .iter()
        .filter_map(|v| v.as_object())
        .filter_map(parameter_spec)
        .collect();
    if parameters.is_empty() {
        None
    } else {
        Some(parameters)
    }
}

/// One column definition.
///
/// The position key differs by source (`index` vs the canonical
/// `column_index`); both are accepted. The source-side
/// `exclude_from_parse_flag` marker is never copied.
fn subcolumn_spec(obj: &Map<String, Value>, diag: &mut MapperDiagnostics) -> SubcolumnSpec {
    let index = obj
        .get("index")
        .or_else(|| obj.get("column_index"))
        .and_then(value_to_i64)
        .unwrap_or(0);
    let value_type = obj.get("value_type").or_else(|| obj.get("result_type"));
    SubcolumnSpec {
        name: obj.get("name").and_then(value_to_string).unwrap_or_default(),
        column_index: index,
        hidden_flag: normalize_flag(obj.get("hidden_flag")),
        ignore_case_flag: normalize_flag(obj.get("ignore_case_flag")),
        result_type: codes::resolve_value_type(value_type, diag),
    }
}

/// Assemble the canonical column list; `None` when empty.
fn subcolumn_list(entries: &[&Value], diag: &mut MapperDiagnostics) -> Option<Vec<SubcolumnSpec>> {
    let subcolumns: Vec<SubcolumnSpec> = entries
        .iter()
        .filter_map(|v| v.as_object())
        .map(|obj| subcolumn_spec(obj, diag))
        .collect();
    if subcolumns.is_empty() {
        None
    } else {
        Some(subcolumns)
    }
}

/// Content-set reference reduced to its name.
fn content_set_ref(v: Option<&Value>) -> Option<ContentSetRef> {
    let name = v
        .and_then(Value::as_object)
        .and_then(|obj| obj.get("name"))
        .and_then(value_to_string)?;
    Some(ContentSetRef { name })
}

/// Assemble and sort the canonical metadata list; `None` when empty.
fn meta_list(entries: &[&Value]) -> Option<Vec<MetaEntry>> {
    let mut metadata: Vec<MetaEntry> = entries
        .iter()
        .filter_map(|v| v.as_object())
        .filter_map(|obj| {
            let name = obj.get("name").and_then(value_to_string)?;
            let value = obj.get("value").and_then(value_to_string).unwrap_or_default();
            Some(MetaEntry { name, value })
        })
        .collect();
    sort_meta_entries(&mut metadata);
    if metadata.is_empty() {
        None
    } else {
        Some(metadata)
    }
}

/// Flatten a plain JSON array field into entry references.
fn plain_list(v: Option<&Value>) -> Vec<&Value> {
    match v {
        Some(Value::Array(items)) => items.iter().collect(),
        _ => Vec::new(),
    }
}

/// Flatten a bundle-style wrapped list into entry references.
///
/// Bundle exports are XML-derived, so a child list appears under a
/// singular key and may be a single object instead of an array:
/// `{"query": {...}}`, `{"query": [{...}, {...}]}`, or already a plain
/// array whose elements may each be wrapped the same way.
fn wrapped_list<'a>(v: Option<&'a Value>, inner_key: &str) -> Vec<&'a Value> {
    fn unwrap_element<'a>(v: &'a Value, inner_key: &str) -> &'a Value {
        match v.as_object().and_then(|obj| obj.get(inner_key)) {
            Some(inner) => inner,
            None => v,
        }
    }
    match v {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| unwrap_element(item, inner_key))
            .collect(),
        Some(Value::Object(obj)) => match obj.get(inner_key) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(single) => vec![single],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_lines_absent_and_empty_are_equivalent() {
        assert_eq!(text_lines(None), None);
        assert_eq!(text_lines(Some(&json!(""))), None);
        assert_eq!(
            text_lines(Some(&json!("a\nb"))),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_text_lines_accepts_canonical_arrays() {
        assert_eq!(
            text_lines(Some(&json!(["a", "b"]))),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_signature_null_literal_becomes_empty() {
        assert_eq!(signature_value(Some(&json!("null"))), "");
        assert_eq!(signature_value(None), "");
        assert_eq!(signature_value(Some(&json!("abc123"))), "abc123");
    }

    #[test]
    fn test_wrapped_list_single_and_array() {
        let single = json!({"query": {"platform": "Linux"}});
        let many = json!({"query": [{"platform": "Linux"}, {"platform": "Mac"}]});
        let plain = json!([{"query": {"platform": "Linux"}}, {"platform": "Mac"}]);
        assert_eq!(wrapped_list(Some(&single), "query").len(), 1);
        assert_eq!(wrapped_list(Some(&many), "query").len(), 2);
        assert_eq!(wrapped_list(Some(&plain), "query").len(), 2);
        assert!(wrapped_list(None, "query").is_empty());
    }

    #[test]
    fn test_subcolumn_spec_drops_exclude_marker() {
        let mut diag = MapperDiagnostics::new();
        let obj = json!({
            "name": "user",
            "index": 2,
            "value_type": "String",
            "ignore_case_flag": true,
            "hidden_flag": false,
            "exclude_from_parse_flag": 1
        });
        let spec = subcolumn_spec(obj.as_object().unwrap(), &mut diag);
        assert_eq!(spec.name, "user");
        assert_eq!(spec.column_index, 2);
        assert_eq!(spec.ignore_case_flag, 1);
        assert_eq!(spec.hidden_flag, 0);
        assert_eq!(spec.result_type, 1);
        let text = serde_json::to_string(&spec).unwrap();
        assert!(!text.contains("exclude_from_parse"));
    }
}
