//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log engine
//! operations and enum-fallback diagnostics.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use driftwatch_core::log_op_start;
/// log_op_start!("partition_sets");
/// log_op_start!("partition_sets", left_len = 12, right_len = 14);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use driftwatch_core::log_op_end;
/// log_op_end!("partition_sets", unchanged = 10, modified = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log a failed operation with its error
///
/// # Example
///
/// ```
/// # use driftwatch_core::log_op_error;
/// # let err = driftwatch_core::errors::DwError::new(
/// #     driftwatch_core::errors::DwErrorKind::MissingField);
/// log_op_error!("map_artifact", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END_ERROR,
            err.code = $err.code(),
            err.message = %$err,
        );
    };
    ($op:expr, $err:expr, $($field:tt)*) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = driftwatch_core_types::schema::EVENT_END_ERROR,
            err.code = $err.code(),
            err.message = %$err,
            $($field)*
        );
    };
}

/// Log an enum value that fell back to its default code
///
/// Unknown enum names are not errors (the mapper resolves them to a
/// documented default), but silent data loss must stay observable.
///
/// # Example
///
/// ```
/// # use driftwatch_core::log_enum_fallback;
/// log_enum_fallback!("value_type", "FutureType", 1);
/// ```
#[macro_export]
macro_rules! log_enum_fallback {
    ($table:expr, $token:expr, $default:expr) => {
        tracing::warn!(
            component = module_path!(),
            event = driftwatch_core_types::schema::EVENT_ENUM_FALLBACK,
            table = $table,
            token = $token,
            default_code = $default,
        );
    };
}
