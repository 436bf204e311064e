//! Core types shared across Driftwatch facilities
//!
//! This crate provides foundational types used by both the error
//! facility and the logging facility:
//!
//! - **Correlation types**: RunId, TraceId, RunContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RunContext, RunId, TraceId};
