//! Correlation types for comparison-run tracking
//!
//! A "run" is one full pass of the engine over a pair of artifact
//! collections. Every error and structured log line produced during a
//! run can carry the same RunId so that the partition output, the
//! fallback diagnostics, and any mapping failures correlate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single comparison run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Generate a new random RunId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trace identifier propagated from a caller that orchestrates several
/// runs (for example a bulk export followed by a comparison)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a new random TraceId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through a comparison run for correlation
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: RunId,
    pub trace_id: Option<TraceId>,
}

impl RunContext {
    /// Create a new context with a fresh RunId
    pub fn new() -> Self {
        Self {
            run_id: RunId::new(),
            trace_id: None,
        }
    }

    /// Create a context with an existing RunId
    pub fn with_run_id(run_id: RunId) -> Self {
        Self {
            run_id,
            trace_id: None,
        }
    }

    /// Add a TraceId to the context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_generation() {
        let id1 = RunId::new();
        let id2 = RunId::new();

        // Should generate different IDs
        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
        assert!(!id2.as_str().is_empty());
    }

    #[test]
    fn test_run_id_display() {
        let id = RunId::new();
        let display_str = format!("{}", id);
        assert_eq!(display_str, id.as_str());
    }

    #[test]
    fn test_trace_id_generation() {
        let id1 = TraceId::new();
        let id2 = TraceId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_run_context_creation() {
        let ctx = RunContext::new();
        assert!(!ctx.run_id.as_str().is_empty());
        assert!(ctx.trace_id.is_none());
    }

    #[test]
    fn test_run_context_with_trace_id() {
        let trace_id = TraceId::new();
        let ctx = RunContext::new().with_trace_id(trace_id.clone());

        assert_eq!(ctx.trace_id, Some(trace_id));
    }

    #[test]
    fn test_serialization_round_trip() {
        let id = RunId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RunId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
