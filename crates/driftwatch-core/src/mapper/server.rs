//! Server-shape front-end for the canonical mapper.
//!
//! The management-server query endpoint returns flat records: named
//! enum strings (`value_type`), boolean flags, plain JSON arrays for
//! child lists, and the whole parameter block packed into one JSON
//! string (`parameter_definition`).

use serde_json::Value;

use super::{
    codes, content_set_ref, hidden_flag, meta_list, numeric_hash, optional_string, parameter_list,
    plain_list, query_list, subcolumn_list, text_lines, MapperDiagnostics,
};
use crate::errors::Result;
use crate::model::canonical::{CanonicalArtifact, ParameterSpec};
use crate::model::raw::RawArtifact;
use crate::normalize::normalize_flag;

pub(super) fn map(raw: &RawArtifact, diag: &mut MapperDiagnostics) -> Result<CanonicalArtifact> {
    let name = raw.require_name()?.to_string();
    Ok(CanonicalArtifact {
        name,
        category: raw.category().to_string(),
        // `result_type` accepted as well so canonical output maps to
        // itself when re-fed through this shape
        result_type: codes::resolve_value_type(
            raw.get("value_type").or_else(|| raw.get("result_type")),
            diag,
        ),
        hash: numeric_hash(raw.get("what_hash").or_else(|| raw.get("hash"))),
        max_age_seconds: raw.integer_field("max_age_seconds"),
        ignore_case_flag: normalize_flag(raw.get("ignore_case_flag")),
        hidden_flag: hidden_flag(raw.get("hidden_flag")),
        delimiter: optional_string(raw.get("delimiter")),
        description: text_lines(raw.get("description")),
        content_set: content_set_ref(raw.get("content_set")),
        queries: query_list(&plain_list(raw.get("queries")), diag),
        parameters: parameters(raw),
        subcolumns: subcolumn_list(&plain_list(raw.get("subcolumns")), diag),
        metadata: meta_list(&plain_list(raw.get("metadata"))),
    })
}

/// Server-side parameter extraction.
///
/// The endpoint packs parameters into a single JSON string under
/// `parameter_definition` (`{"parameters": [...]}`). A plain
/// `parameters` array (the canonical form) is accepted directly. An
/// unparseable definition string means "no parameters" - mapping stays
/// total.
fn parameters(raw: &RawArtifact) -> Option<Vec<ParameterSpec>> {
    if let Some(Value::Array(items)) = raw.get("parameters") {
        let entries: Vec<&Value> = items.iter().collect();
        return parameter_list(&entries);
    }
    let definition = raw.get("parameter_definition")?.as_str()?;
    let parsed: Value = serde_json::from_str(definition).ok()?;
    let items = parsed.get("parameters")?.as_array()?;
    let entries: Vec<&Value> = items.iter().collect();
    parameter_list(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw::RawArtifact;
    use serde_json::json;

    fn raw(value: Value) -> RawArtifact {
        RawArtifact::from_value(value).unwrap()
    }

    #[test]
    fn test_parameter_definition_string_parses() {
        let artifact = raw(json!({
            "name": "SensorX",
            "parameter_definition":
                "{\"parameters\": [{\"varname\": \"dir\", \"value\": \"/tmp\"}]}"
        }));
        let parameters = parameters(&artifact).unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].varname, "dir");
        assert_eq!(parameters[0].value, "/tmp");
        assert_eq!(parameters[0].param_type, None);
    }

    #[test]
    fn test_unparseable_parameter_definition_means_none() {
        let artifact = raw(json!({
            "name": "SensorX",
            "parameter_definition": "not json at all {"
        }));
        assert_eq!(parameters(&artifact), None);
    }

    #[test]
    fn test_empty_parameter_list_is_omitted() {
        let artifact = raw(json!({
            "name": "SensorX",
            "parameter_definition": "{\"parameters\": []}"
        }));
        assert_eq!(parameters(&artifact), None);
    }
}
