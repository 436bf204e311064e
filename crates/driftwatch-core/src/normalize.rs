//! Text normalization and deterministic sort helpers.
//!
//! These helpers are shared by the mapper and the canonical serializer
//! and deliberately know nothing about their call sites: the same
//! normalization applies to descriptions, query bodies, and any other
//! free text, so two sources that differ only in line endings or
//! trailing newlines canonicalize identically.

use serde_json::Value;

use crate::model::canonical::{MetaEntry, PlatformQuery};

/// Normalize free text into an ordered sequence of lines.
///
/// Carriage returns are stripped, the text is split on `\n`, and a
/// single trailing empty element (produced by a final newline) is
/// dropped. Line-level diffing is only meaningful over this form.
pub fn normalize_lines(s: &str) -> Vec<String> {
    let stripped = s.replace('\r', "");
    let mut lines: Vec<String> = stripped.split('\n').map(str::to_string).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Normalize a flag value to an explicit 0 or 1.
///
/// Booleans, numbers, and the strings `"1"`/`"true"` are recognized as
/// truthy; everything else (including absence) is 0.
pub fn normalize_flag(v: Option<&Value>) -> i64 {
    match v {
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::Number(n)) => i64::from(n.as_i64().unwrap_or(0) != 0),
        Some(Value::String(s)) => i64::from(s == "1" || s == "true"),
        _ => 0,
    }
}

/// Resolve a name through a code table.
///
/// Lookup is exact and case-sensitive; a missing key resolves to the
/// default code rather than erroring.
pub fn resolve_code(table: &[(&str, i64)], key: &str, default: i64) -> i64 {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(default, |(_, code)| *code)
}

/// Sort per-platform query entries into their canonical order.
///
/// The key is the full `(platform, script, signature)` triple: a total
/// order, so two collections holding the same entries in different
/// input order serialize byte-identically even when two entries share
/// a platform code.
pub fn sort_platform_queries(queries: &mut [PlatformQuery]) {
    queries.sort();
}

/// Sort metadata entries by `(name, value)`.
pub fn sort_meta_entries(entries: &mut [MetaEntry]) {
    entries.sort();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_lines_strips_carriage_returns() {
        assert_eq!(
            normalize_lines("a\r\nb\r\nc"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_normalize_lines_drops_single_trailing_empty() {
        assert_eq!(normalize_lines("a\nb\n"), vec!["a", "b"]);
        // Only one trailing empty element is dropped
        assert_eq!(normalize_lines("a\nb\n\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_normalize_lines_empty_input() {
        assert!(normalize_lines("").is_empty());
        // A lone newline splits into two empties; exactly one is dropped
        assert_eq!(normalize_lines("\n"), vec![""]);
    }

    #[test]
    fn test_normalize_flag_encodings() {
        assert_eq!(normalize_flag(Some(&json!(true))), 1);
        assert_eq!(normalize_flag(Some(&json!(false))), 0);
        assert_eq!(normalize_flag(Some(&json!(1))), 1);
        assert_eq!(normalize_flag(Some(&json!(0))), 0);
        assert_eq!(normalize_flag(Some(&json!("1"))), 1);
        assert_eq!(normalize_flag(Some(&json!("true"))), 1);
        assert_eq!(normalize_flag(Some(&json!("0"))), 0);
        assert_eq!(normalize_flag(Some(&json!("yes"))), 0);
        assert_eq!(normalize_flag(None), 0);
    }

    #[test]
    fn test_resolve_code_exact_case_sensitive() {
        let table = &[("Linux", 1), ("Mac", 2)];
        assert_eq!(resolve_code(table, "Linux", 0), 1);
        assert_eq!(resolve_code(table, "linux", 0), 0);
        assert_eq!(resolve_code(table, "Windows", 0), 0);
    }

    #[test]
    fn test_sort_platform_queries_is_order_insensitive() {
        let make = |platform: i64, script: &str| PlatformQuery {
            platform,
            script: vec![script.to_string()],
            signature: String::new(),
        };
        let mut a = vec![make(3, "s"), make(0, "w"), make(1, "l")];
        let mut b = vec![make(1, "l"), make(3, "s"), make(0, "w")];
        sort_platform_queries(&mut a);
        sort_platform_queries(&mut b);
        assert_eq!(a, b);
        assert_eq!(a[0].platform, 0);
    }
}
