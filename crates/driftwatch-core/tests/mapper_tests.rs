//! Canonical mapper tests - both source shapes over one logical sensor.
//!
//! All tests operate on in-memory records (no I/O).

use driftwatch_core::mapper::{map_artifact, MapperDiagnostics};
use driftwatch_core::model::{RawArtifact, SourceShape};
use driftwatch_core::serialize::canonical_bytes;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn raw(value: Value) -> RawArtifact {
    RawArtifact::from_value(value).unwrap()
}

/// One sensor as the management-server query endpoint returns it.
fn server_sensor() -> Value {
    json!({
        "name": "Installed Applications",
        "category": "Software",
        "value_type": "String",
        "max_age_seconds": 600,
        "description": "Lists installed applications.\nOne per line.\n",
        "delimiter": "|",
        "ignore_case_flag": true,
        "hidden_flag": false,
        "metadata": [
            {"name": "defined_by", "value": "ops"},
            {"name": "author", "value": "alice"}
        ],
        "queries": [
            {"platform": "Windows", "script": "select name from apps\r\n", "signature": "null"},
            {"platform": "Linux", "script": "dpkg -l\n", "signature": "sig-abc"}
        ],
        "parameter_definition":
            "{\"parameters\": [{\"varname\": \"scope\", \"value\": \"all\", \"type\": \"string\"}]}",
        "subcolumns": [
            {"name": "Name", "index": 0, "value_type": "String",
             "ignore_case_flag": 1, "hidden_flag": 0, "exclude_from_parse_flag": 0},
            {"name": "Version", "index": 1, "value_type": "Version",
             "ignore_case_flag": 0, "hidden_flag": 0, "exclude_from_parse_flag": 1}
        ],
        "content_set": {"id": 7, "name": "Base Content"},
        "what_hash": "123456"
    })
}

/// The same logical sensor as a bulk content bundle encodes it:
/// wrapped child lists, numeric strings, `qseconds`, `result_type`.
fn bundle_sensor() -> Value {
    json!({
        "name": "Installed Applications",
        "category": "Software",
        "result_type": "1",
        "qseconds": "600",
        "description": "Lists installed applications.\nOne per line.",
        "delimiter": "|",
        "ignore_case_flag": 1,
        "hidden_flag": 0,
        "meta_data": {"meta_data_item": [
            {"name": "author", "value": "alice"},
            {"name": "defined_by", "value": "ops"}
        ]},
        "queries": {"query": [
            {"platform": "Linux", "script": "dpkg -l", "signature": "sig-abc"},
            {"platform": "Windows", "script": "select name from apps"}
        ]},
        "parameters": [
            {"parameter": {"varname": "scope", "value": "all", "type": "string"}}
        ],
        "subcolumns": {"subcolumn": [
            {"name": "Name", "index": "0", "value_type": "String",
             "ignore_case_flag": "1", "hidden_flag": "0"},
            {"name": "Version", "index": "1", "value_type": "Version",
             "ignore_case_flag": "0", "hidden_flag": "0", "exclude_from_parse_flag": "1"}
        ]},
        "content_set": {"name": "Base Content"},
        "what_hash": 123456
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// S1: Mapping is deterministic
#[test]
fn test_mapping_is_deterministic() {
    let artifact = raw(server_sensor());
    let mut diag = MapperDiagnostics::new();
    let first = map_artifact(&artifact, SourceShape::Server, &mut diag).unwrap();
    let second = map_artifact(&artifact, SourceShape::Server, &mut diag).unwrap();
    assert_eq!(first, second);
}

// S2: Both shapes of the same logical artifact canonicalize
// byte-identically
#[test]
fn test_cross_shape_canonicalization_is_byte_identical() {
    let mut diag = MapperDiagnostics::new();
    let from_server =
        map_artifact(&raw(server_sensor()), SourceShape::Server, &mut diag).unwrap();
    let from_bundle =
        map_artifact(&raw(bundle_sensor()), SourceShape::Bundle, &mut diag).unwrap();
    assert_eq!(from_server, from_bundle);
    assert_eq!(
        canonical_bytes(&from_server).unwrap(),
        canonical_bytes(&from_bundle).unwrap()
    );
    assert!(diag.is_empty(), "no enum fallback expected: {:?}", diag);
}

// S3: Field-level rules on the server shape
#[test]
fn test_server_field_rules() {
    let mut diag = MapperDiagnostics::new();
    let canonical =
        map_artifact(&raw(server_sensor()), SourceShape::Server, &mut diag).unwrap();

    assert_eq!(canonical.name, "Installed Applications");
    assert_eq!(canonical.result_type, 1);
    // String-encoded hash becomes numeric
    assert_eq!(canonical.hash, Some(123456));
    assert_eq!(canonical.max_age_seconds, Some(600));
    assert_eq!(canonical.ignore_case_flag, 1);
    // hidden_flag false -> omitted
    assert_eq!(canonical.hidden_flag, None);
    assert_eq!(canonical.delimiter.as_deref(), Some("|"));
    // Trailing newline dropped, CR stripped
    assert_eq!(
        canonical.description.as_deref(),
        Some(&["Lists installed applications.".to_string(), "One per line.".to_string()][..])
    );
    // Content set reduced to its name
    assert_eq!(canonical.content_set.as_ref().unwrap().name, "Base Content");
}

// S4: Query entries sort by platform code and normalize signatures
#[test]
fn test_query_entries_sorted_and_normalized() {
    let mut diag = MapperDiagnostics::new();
    let canonical =
        map_artifact(&raw(server_sensor()), SourceShape::Server, &mut diag).unwrap();

    assert_eq!(canonical.queries.len(), 2);
    // Windows (base case, code 0) sorts before Linux (code 1)
    assert_eq!(canonical.queries[0].platform, 0);
    assert_eq!(canonical.queries[0].script, vec!["select name from apps"]);
    // Literal "null" signature becomes empty string
    assert_eq!(canonical.queries[0].signature, "");
    assert_eq!(canonical.queries[1].platform, 1);
    assert_eq!(canonical.queries[1].signature, "sig-abc");
}

// S5: Metadata sorts by (name, value) regardless of input order
#[test]
fn test_metadata_sorted() {
    let mut diag = MapperDiagnostics::new();
    let canonical =
        map_artifact(&raw(server_sensor()), SourceShape::Server, &mut diag).unwrap();
    let metadata = canonical.metadata.unwrap();
    assert_eq!(metadata[0].name, "author");
    assert_eq!(metadata[1].name, "defined_by");
}

// S6: The exclude-from-parse marker never reaches canonical form
#[test]
fn test_exclude_from_parse_marker_is_dropped() {
    let mut diag = MapperDiagnostics::new();
    let canonical =
        map_artifact(&raw(server_sensor()), SourceShape::Server, &mut diag).unwrap();
    let subcolumns = canonical.subcolumns.as_ref().unwrap();
    assert_eq!(subcolumns.len(), 2);
    assert_eq!(subcolumns[1].name, "Version");
    assert_eq!(subcolumns[1].result_type, 2);
    let text = serde_json::to_string(&canonical).unwrap();
    assert!(!text.contains("exclude_from_parse"));
}

// S7: Unknown value type falls back to 1 and is counted
#[test]
fn test_unknown_value_type_falls_back_to_string_code() {
    let mut diag = MapperDiagnostics::new();
    let artifact = raw(json!({"name": "SensorX", "value_type": "FutureType"}));
    let canonical = map_artifact(&artifact, SourceShape::Server, &mut diag).unwrap();
    assert_eq!(canonical.result_type, 1);
    assert_eq!(diag.unknown_value_types.get("FutureType"), Some(&1));
    assert_eq!(diag.total_fallbacks(), 1);
}

// S8: Absent and present-but-empty optionals canonicalize identically
#[test]
fn test_absent_vs_empty_optionals_are_equivalent() {
    let mut diag = MapperDiagnostics::new();
    let with_empty = raw(json!({
        "name": "SensorX",
        "description": "",
        "delimiter": "",
        "metadata": [],
        "parameters": [],
        "subcolumns": []
    }));
    let without = raw(json!({"name": "SensorX"}));
    let a = map_artifact(&with_empty, SourceShape::Server, &mut diag).unwrap();
    let b = map_artifact(&without, SourceShape::Server, &mut diag).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        canonical_bytes(&a).unwrap(),
        canonical_bytes(&b).unwrap()
    );
}

// S9: hidden_flag is emitted only when true, and then as 1
#[test]
fn test_hidden_flag_only_when_true() {
    let mut diag = MapperDiagnostics::new();
    let hidden = raw(json!({"name": "SensorX", "hidden_flag": true}));
    let visible = raw(json!({"name": "SensorX", "hidden_flag": false}));
    let canonical_hidden = map_artifact(&hidden, SourceShape::Server, &mut diag).unwrap();
    let canonical_visible = map_artifact(&visible, SourceShape::Server, &mut diag).unwrap();
    assert_eq!(canonical_hidden.hidden_flag, Some(1));
    assert_eq!(canonical_visible.hidden_flag, None);
    let text = serde_json::to_string(&canonical_visible).unwrap();
    assert!(!text.contains("hidden_flag"));
}

// S10: ignore_case_flag is always an explicit 0 or 1
#[test]
fn test_ignore_case_flag_always_explicit() {
    let mut diag = MapperDiagnostics::new();
    let absent = raw(json!({"name": "SensorX"}));
    let canonical = map_artifact(&absent, SourceShape::Server, &mut diag).unwrap();
    assert_eq!(canonical.ignore_case_flag, 0);
    let text = serde_json::to_string(&canonical).unwrap();
    assert!(text.contains("\"ignore_case_flag\":0"));
}

// S11: A record without a name is the one mapping failure
#[test]
fn test_missing_name_is_a_mapping_error() {
    let mut diag = MapperDiagnostics::new();
    let nameless = raw(json!({"category": "Software"}));
    let err = map_artifact(&nameless, SourceShape::Server, &mut diag).unwrap_err();
    assert_eq!(err.kind(), driftwatch_core::DwErrorKind::MissingField);
}

// S12: Mapping is idempotent when canonical output is re-fed through
// the server shape
#[test]
fn test_mapping_idempotent_on_canonical_input() {
    let mut diag = MapperDiagnostics::new();
    let canonical =
        map_artifact(&raw(server_sensor()), SourceShape::Server, &mut diag).unwrap();
    let as_value = serde_json::to_value(&canonical).unwrap();
    let remapped =
        map_artifact(&raw(as_value), SourceShape::Server, &mut diag).unwrap();
    assert_eq!(canonical, remapped);
}

// S13: Unparseable parameter_definition means no parameters, not an error
#[test]
fn test_unparseable_parameter_definition_is_tolerated() {
    let mut diag = MapperDiagnostics::new();
    let artifact = raw(json!({
        "name": "SensorX",
        "parameter_definition": "{broken json"
    }));
    let canonical = map_artifact(&artifact, SourceShape::Server, &mut diag).unwrap();
    assert_eq!(canonical.parameters, None);
}

// S14: Bundle numeric result_type passes through unchanged
#[test]
fn test_bundle_numeric_result_type_passthrough() {
    let mut diag = MapperDiagnostics::new();
    let artifact = raw(json!({"name": "SensorX", "result_type": 11}));
    let canonical = map_artifact(&artifact, SourceShape::Bundle, &mut diag).unwrap();
    assert_eq!(canonical.result_type, 11);
    assert!(diag.is_empty());
}

// S15: Bundle single-object wrapped lists map like one-element arrays
#[test]
fn test_bundle_single_wrapped_child() {
    let mut diag = MapperDiagnostics::new();
    let artifact = raw(json!({
        "name": "SensorX",
        "queries": {"query": {"platform": "Mac", "script": "system_profiler"}}
    }));
    let canonical = map_artifact(&artifact, SourceShape::Bundle, &mut diag).unwrap();
    assert_eq!(canonical.queries.len(), 1);
    assert_eq!(canonical.queries[0].platform, 2);
    assert_eq!(canonical.queries[0].script, vec!["system_profiler"]);
}

// S16: Query entries sharing a platform code keep a stable total order
#[test]
fn test_same_platform_queries_total_order() {
    let mut diag = MapperDiagnostics::new();
    let forward = raw(json!({
        "name": "SensorX",
        "queries": [
            {"platform": "Linux", "script": "aaa"},
            {"platform": "Linux", "script": "bbb"}
        ]
    }));
    let reversed = raw(json!({
        "name": "SensorX",
        "queries": [
            {"platform": "Linux", "script": "bbb"},
            {"platform": "Linux", "script": "aaa"}
        ]
    }));
    let a = map_artifact(&forward, SourceShape::Server, &mut diag).unwrap();
    let b = map_artifact(&reversed, SourceShape::Server, &mut diag).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.queries[0].script, vec!["aaa"]);
}
