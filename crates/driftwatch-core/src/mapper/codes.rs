//! Enumeration code tables shared by both source shapes.
//!
//! Value types and platforms arrive as named strings (or, in bundle
//! exports, as already-numeric codes) and resolve to small integer
//! codes. Unrecognized names never error: they fall back to the
//! documented default code, and the fallback is counted so silent data
//! loss stays observable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::log_enum_fallback;
use crate::normalize::resolve_code;

/// Named value types and their canonical codes.
pub const VALUE_TYPE_CODES: &[(&str, i64)] = &[
    ("BESDate", 4),
    ("DataSize", 8),
    ("Hash", 0),
    ("HashMatch", 0),
    ("IPAddress", 5),
    ("Numeric", 3),
    ("NumericInteger", 9),
    ("RegexMatch", 11),
    ("String", 1),
    ("TimeDiff", 7),
    ("Version", 2),
    ("WMIDate", 6),
];

/// Fallback value-type code ("String").
pub const DEFAULT_VALUE_TYPE: i64 = 1;

/// Named platforms and their canonical codes.
pub const PLATFORM_CODES: &[(&str, i64)] = &[
    ("AIX", 4),
    ("Linux", 1),
    ("Mac", 2),
    ("Solaris", 3),
];

/// Fallback platform code (the base/Windows case).
pub const DEFAULT_PLATFORM: i64 = 0;

/// Per-run counters for enum names that fell back to a default code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperDiagnostics {
    /// Unrecognized value-type names and how often each was seen
    pub unknown_value_types: BTreeMap<String, u64>,
    /// Unrecognized platform names and how often each was seen
    pub unknown_platforms: BTreeMap<String, u64>,
}

impl MapperDiagnostics {
    /// Create empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one value-type fallback.
    pub fn record_unknown_value_type(&mut self, token: &str) {
        *self
            .unknown_value_types
            .entry(token.to_string())
            .or_insert(0) += 1;
    }

    /// Count one platform fallback.
    pub fn record_unknown_platform(&mut self, token: &str) {
        *self
            .unknown_platforms
            .entry(token.to_string())
            .or_insert(0) += 1;
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &MapperDiagnostics) {
        for (token, count) in &other.unknown_value_types {
            *self
                .unknown_value_types
                .entry(token.clone())
                .or_insert(0) += count;
        }
        for (token, count) in &other.unknown_platforms {
            *self.unknown_platforms.entry(token.clone()).or_insert(0) += count;
        }
    }

    /// Total number of fallbacks across both tables.
    pub fn total_fallbacks(&self) -> u64 {
        self.unknown_value_types.values().sum::<u64>()
            + self.unknown_platforms.values().sum::<u64>()
    }

    /// True when no fallback occurred.
    pub fn is_empty(&self) -> bool {
        self.unknown_value_types.is_empty() && self.unknown_platforms.is_empty()
    }
}

/// Resolve a raw value-type value to its canonical code.
///
/// Already-numeric forms (integers, or strings of digits as bundle
/// exports produce) pass through unchanged; names resolve through
/// [`VALUE_TYPE_CODES`]; anything else falls back to
/// [`DEFAULT_VALUE_TYPE`] and is counted.
pub fn resolve_value_type(v: Option<&Value>, diag: &mut MapperDiagnostics) -> i64 {
    match v {
        None => DEFAULT_VALUE_TYPE,
        Some(Value::Number(n)) => n.as_i64().unwrap_or(DEFAULT_VALUE_TYPE),
        Some(Value::String(s)) => {
            let token = s.trim();
            if token.is_empty() {
                return DEFAULT_VALUE_TYPE;
            }
            if let Ok(code) = token.parse::<i64>() {
                return code;
            }
            let code = resolve_code(VALUE_TYPE_CODES, token, DEFAULT_VALUE_TYPE);
            if !VALUE_TYPE_CODES.iter().any(|(name, _)| *name == token) {
                diag.record_unknown_value_type(token);
                log_enum_fallback!("value_type", token, DEFAULT_VALUE_TYPE);
            }
            code
        }
        Some(_) => DEFAULT_VALUE_TYPE,
    }
}

/// Resolve a platform value to its canonical code.
///
/// Numeric codes pass through; names resolve through
/// [`PLATFORM_CODES`]. The base/Windows case is the documented default
/// and is not counted as a fallback; any other unrecognized name is.
pub fn resolve_platform(v: Option<&Value>, diag: &mut MapperDiagnostics) -> i64 {
    match v {
        None => DEFAULT_PLATFORM,
        Some(Value::Number(n)) => n.as_i64().unwrap_or(DEFAULT_PLATFORM),
        Some(Value::String(s)) => {
            let token = s.trim();
            if token.is_empty() {
                return DEFAULT_PLATFORM;
            }
            let code = resolve_code(PLATFORM_CODES, token, DEFAULT_PLATFORM);
            let known = PLATFORM_CODES.iter().any(|(name, _)| *name == token);
            if !known && token != "Windows" {
                diag.record_unknown_platform(token);
                log_enum_fallback!("platform", token, DEFAULT_PLATFORM);
            }
            code
        }
        Some(_) => DEFAULT_PLATFORM,
    }
}
