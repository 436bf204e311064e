//! Bundle-shape front-end for the canonical mapper.
//!
//! Bulk content-export bundles are XML-derived JSON: child lists
//! appear wrapped under a singular key (`{"query": ...}`,
//! `{"subcolumn": ...}`, `{"meta_data_item": ...}`) and may hold a
//! single object instead of an array; numeric fields often arrive as
//! strings; the refresh interval is called `qseconds`.

use serde_json::Value;

use super::{
    codes, content_set_ref, hidden_flag, meta_list, numeric_hash, optional_string, parameter_list,
    query_list, subcolumn_list, text_lines, wrapped_list, MapperDiagnostics,
};
use crate::errors::Result;
use crate::model::canonical::CanonicalArtifact;
use crate::model::raw::RawArtifact;
use crate::normalize::normalize_flag;

pub(super) fn map(raw: &RawArtifact, diag: &mut MapperDiagnostics) -> Result<CanonicalArtifact> {
    let name = raw.require_name()?.to_string();
    Ok(CanonicalArtifact {
        name,
        category: raw.category().to_string(),
        result_type: codes::resolve_value_type(raw.get("result_type"), diag),
        hash: numeric_hash(raw.get("what_hash").or_else(|| raw.get("hash"))),
        max_age_seconds: raw.integer_field("qseconds"),
        ignore_case_flag: normalize_flag(raw.get("ignore_case_flag")),
        hidden_flag: hidden_flag(raw.get("hidden_flag")),
        delimiter: optional_string(raw.get("delimiter")),
        description: text_lines(raw.get("description")),
        content_set: content_set_ref(raw.get("content_set")),
        queries: query_list(&wrapped_list(raw.get("queries"), "query"), diag),
        parameters: parameter_list(&parameter_entries(raw)),
        subcolumns: subcolumn_list(&wrapped_list(raw.get("subcolumns"), "subcolumn"), diag),
        metadata: meta_list(&wrapped_list(raw.get("meta_data"), "meta_data_item")),
    })
}

/// Bundle parameters arrive as an array of `{"parameter": {...}}`
/// wrappers (plain objects are accepted too).
fn parameter_entries(raw: &RawArtifact) -> Vec<&Value> {
    wrapped_list(raw.get("parameters"), "parameter")
}
