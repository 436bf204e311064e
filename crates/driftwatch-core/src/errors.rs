//! Canonical error facility for the comparison engine.
//!
//! Every fallible operation in this crate returns [`DwError`], a
//! structured error with a closed kind taxonomy and a stable string
//! code per kind. Errors never abort a whole partition: the unit of
//! failure isolation is a single named artifact, and callers collect
//! per-artifact failures while the rest of the run proceeds.

/// Result type alias using DwError
pub type Result<T> = std::result::Result<T, DwError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for
/// programmatic handling, testing, and report payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwErrorKind {
    // Mapping
    /// A raw artifact record is missing a structurally required field (e.g. `name`)
    MissingField,
    /// A raw artifact record is not an object, or a field has an unusable shape
    InvalidArtifact,

    // Classification
    /// A canonical record failed to serialize; the pair is forced to Substantive
    Serialization,
    /// Engine output failed its internal round-trip sanity check
    DeterminismViolation,

    // Boundary (CLI / report handling)
    /// A comparison report could not be parsed or references unknown buckets
    InvalidReport,
    /// File read/write failed at the CLI boundary
    Io,

    // Internal
    Internal,
}

impl DwErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            DwErrorKind::MissingField => "ERR_MISSING_FIELD",
            DwErrorKind::InvalidArtifact => "ERR_INVALID_ARTIFACT",
            DwErrorKind::Serialization => "ERR_SERIALIZATION",
            DwErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            DwErrorKind::InvalidReport => "ERR_INVALID_REPORT",
            DwErrorKind::Io => "ERR_IO",
            DwErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the kind plus optional context: the operation that failed,
/// the artifact it failed for, a human-readable message, and an
/// optional source error.
#[derive(Debug, Clone)]
pub struct DwError {
    kind: DwErrorKind,
    op: Option<String>,
    artifact: Option<String>,
    message: String,
    source: Option<Box<DwError>>,
}

impl DwError {
    /// Create a new error with the specified kind
    pub fn new(kind: DwErrorKind) -> Self {
        Self {
            kind,
            op: None,
            artifact: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the artifact the error applies to
    pub fn with_artifact(mut self, name: impl Into<String>) -> Self {
        self.artifact = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: DwError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> DwErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the artifact name context, if any
    pub fn artifact(&self) -> Option<&str> {
        self.artifact.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&DwError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for DwError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(artifact) = &self.artifact {
            write!(f, " (artifact: {})", artifact)?;
        }
        Ok(())
    }
}

impl std::error::Error for DwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<serde_json::Error> for DwError {
    fn from(e: serde_json::Error) -> Self {
        DwError::new(DwErrorKind::Serialization).with_message(e.to_string())
    }
}
