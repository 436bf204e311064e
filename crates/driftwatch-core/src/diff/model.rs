//! Diff classifier output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize,
//! PartialEq` so results can ride inside comparison reports unchanged.

use serde::{Deserialize, Serialize};

/// The operation a diff segment applies to the left text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffOp {
    /// Text common to both sides
    Equal,
    /// Text present only in the right side
    Insert,
    /// Text present only in the left side
    Delete,
}

/// One contiguous run of diffed text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSegment {
    /// Which side(s) the text belongs to
    pub op: DiffOp,
    /// The segment text; multi-line segments join lines with `\n`
    pub text: String,
}

impl DiffSegment {
    /// Convenience constructor.
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }
}

/// The three-way classification of a compared pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffVerdict {
    /// Serialized forms are identical
    Identical,
    /// Every differing segment is blank or comment/quote/separator text
    CommentsOnly,
    /// At least one differing segment carries substantive content
    Substantive,
}

/// The full result of comparing two canonical records with the same
/// name: the verdict plus the underlying segment list for audit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffResult {
    /// Classification of the pair
    pub verdict: DiffVerdict,
    /// Ordered diff segments backing the verdict
    pub segments: Vec<DiffSegment>,
    /// Serialization error that forced a fail-open verdict, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Classifier behavior switches.
///
/// The source this engine consolidates carried the comments-only
/// heuristic in several near-duplicate copies with one rule variant:
/// the stricter copies additionally strip `"` and `,` characters from
/// a non-comment segment and re-check whether anything remains. The
/// strict behavior is the default; `strict: false` restores the
/// lenient variant for bug-for-bug parity with the other call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Strip `"`/`,` from non-comment segments and re-check before
    /// declaring the pair substantive
    pub strict: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}
