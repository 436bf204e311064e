//! Persisted canonical form tests: stability, round-trips, digests.

use driftwatch_core::mapper::{map_artifact, MapperDiagnostics};
use driftwatch_core::model::{CanonicalArtifact, RawArtifact, SourceShape};
use driftwatch_core::serialize::{canonical_bytes, canonical_text, content_digest};
use serde_json::{json, Value};

fn canonical(value: Value) -> CanonicalArtifact {
    let raw = RawArtifact::from_value(value).unwrap();
    let mut diag = MapperDiagnostics::new();
    map_artifact(&raw, SourceShape::Server, &mut diag).unwrap()
}

// S1: Serialization is byte-stable across calls
#[test]
fn test_serialization_byte_stable() {
    let artifact = canonical(json!({
        "name": "SensorX",
        "value_type": "Version",
        "description": "multi\nline",
        "queries": [{"platform": "AIX", "script": "oslevel"}]
    }));
    assert_eq!(
        canonical_bytes(&artifact).unwrap(),
        canonical_bytes(&artifact).unwrap()
    );
}

// S2: The persisted form deserializes back to an equal record
#[test]
fn test_persisted_form_round_trips() {
    let artifact = canonical(json!({
        "name": "SensorX",
        "value_type": "IPAddress",
        "delimiter": "|",
        "metadata": [{"name": "k", "value": "v"}]
    }));
    let text = canonical_text(&artifact).unwrap();
    let reparsed: CanonicalArtifact = serde_json::from_str(&text).unwrap();
    assert_eq!(artifact, reparsed);
    // Re-serializing the reparsed record is byte-identical
    assert_eq!(text, canonical_text(&reparsed).unwrap());
}

// S3: Digests are equal iff canonical bytes are equal
#[test]
fn test_digest_tracks_canonical_bytes() {
    let a = canonical(json!({"name": "SensorX", "description": "same"}));
    let b = canonical(json!({"name": "SensorX", "description": "same"}));
    let c = canonical(json!({"name": "SensorX", "description": "different"}));
    assert_eq!(content_digest(&a).unwrap(), content_digest(&b).unwrap());
    assert_ne!(content_digest(&a).unwrap(), content_digest(&c).unwrap());
}

// S4: Two independent mappings of absent-vs-empty sources persist
// byte-identically
#[test]
fn test_absent_vs_empty_persist_identically() {
    let a = canonical(json!({"name": "SensorX", "description": "", "parameters": []}));
    let b = canonical(json!({"name": "SensorX"}));
    assert_eq!(
        canonical_bytes(&a).unwrap(),
        canonical_bytes(&b).unwrap()
    );
}
