//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error
//! reporting in the comparison engine and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Comparison identifiers
pub const FIELD_ARTIFACT: &str = "artifact";
pub const FIELD_COLLECTION: &str = "collection";
pub const FIELD_SHAPE: &str = "shape";
pub const FIELD_BUCKET: &str = "bucket";

// Collection sizes
pub const FIELD_LEFT_LEN: &str = "left_len";
pub const FIELD_RIGHT_LEN: &str = "right_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_ENUM_FALLBACK: &str = "enum_fallback";
