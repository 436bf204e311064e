//! Diff classifier.
//!
//! Compares two canonical artifact records through their serialized
//! forms and classifies the result as identical, comments-only, or
//! substantive.
//!
//! ## Entry point
//!
//! ```ignore
//! use driftwatch_core::diff::{classify_pair, ClassifierConfig};
//!
//! let result = classify_pair(&left, &right, &ClassifierConfig::default());
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical segment lists
//!   and verdicts on every run.
//! - **Fail open**: a record that cannot be serialized classifies the
//!   pair as `Substantive` with the error attached; a pair is never
//!   silently dropped from review.
//! - **Noise tolerance**: differences consisting only of blank,
//!   comment-marker, quote, or separator text yield `CommentsOnly`
//!   instead of flooding the modified bucket.

pub mod classify;
pub mod model;
pub mod textdiff;

pub use classify::{classify_pair, classify_segments};
pub use model::{ClassifierConfig, DiffOp, DiffResult, DiffSegment, DiffVerdict};
pub use textdiff::diff_lines;
