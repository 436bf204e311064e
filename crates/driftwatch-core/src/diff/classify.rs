//! Comments-only classification over diff segments.
//!
//! Artifacts frequently differ only in trailing commas, quoting style,
//! or comment-marker-prefixed lines across two otherwise-identical
//! server instances. The walk below keeps such pairs out of the
//! substantive bucket. It is a heuristic: false negatives are possible
//! and accepted in exchange for a reviewable modified list.

use crate::diff::model::{ClassifierConfig, DiffOp, DiffResult, DiffSegment, DiffVerdict};
use crate::diff::textdiff::diff_lines;
use crate::model::canonical::CanonicalArtifact;
use crate::serialize::canonical_text;

/// Characters that mark a differing segment as comment-like.
const COMMENT_MARKERS: [char; 3] = ['#', ',', '\''];

/// Classify an already-computed segment list.
///
/// Tracks two flags over the walk: `all_equal` (no differing segment
/// seen yet) and `only_comments` (no substantive differing segment
/// seen yet). Equal segments affect neither flag. For each differing
/// segment the text is trimmed; a leading `"` is skipped so a quoted
/// token still classifies by its content. A segment whose effective
/// first character is no comment marker is substantive - unless the
/// strict config strips every `"` and `,` and nothing remains.
pub fn classify_segments(segments: &[DiffSegment], config: &ClassifierConfig) -> DiffVerdict {
    let mut all_equal = true;
    let mut only_comments = true;

    for segment in segments {
        if segment.op == DiffOp::Equal {
            continue;
        }
        all_equal = false;

        let trimmed = segment.text.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut chars = trimmed.chars();
        let mut first = chars.next();
        if first == Some('"') {
            first = chars.next();
        }
        if first.is_some_and(|c| COMMENT_MARKERS.contains(&c)) {
            continue;
        }
        if config.strict {
            let residue = trimmed.chars().any(|c| c != '"' && c != ',');
            if residue {
                only_comments = false;
            }
        } else {
            only_comments = false;
        }
    }

    if all_equal {
        DiffVerdict::Identical
    } else if only_comments {
        DiffVerdict::CommentsOnly
    } else {
        DiffVerdict::Substantive
    }
}

/// Classify a pair of canonical records with the same name.
///
/// Serializes both records to their stable textual form, diffs the
/// texts line-by-line, and classifies the segments. Fails open: if
/// either record cannot be serialized the pair is reported as
/// `Substantive` with the error attached, never silently dropped.
pub fn classify_pair(
    left: &CanonicalArtifact,
    right: &CanonicalArtifact,
    config: &ClassifierConfig,
) -> DiffResult {
    let (left_text, right_text) = match (canonical_text(left), canonical_text(right)) {
        (Ok(l), Ok(r)) => (l, r),
        (Err(e), _) | (_, Err(e)) => {
            return DiffResult {
                verdict: DiffVerdict::Substantive,
                segments: Vec::new(),
                error: Some(e.to_string()),
            };
        }
    };

    let segments = diff_lines(&left_text, &right_text);
    let verdict = classify_segments(&segments, config);
    DiffResult {
        verdict,
        segments,
        error: None,
    }
}
