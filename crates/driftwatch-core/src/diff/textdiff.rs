//! Line-level text diff with semantic cleanup.
//!
//! Computes a longest-common-subsequence diff over the lines of two
//! serialized canonical records, then merges adjacent small edits into
//! larger segments that match human-perceived edit boundaries rather
//! than minimal edit distance. The output is deterministic: within an
//! edit region, deleted text always precedes inserted text.

use crate::diff::model::{DiffOp, DiffSegment};

/// An equal run this short (after trimming) sandwiched between two
/// edits is folded into the surrounding edit. Pretty-printed canonical
/// records separate edits with structural lines like `},` and `],`;
/// keeping those as standalone equalities fragments the segment list.
const SEMANTIC_FOLD_LIMIT: usize = 3;

/// Compute the line-level diff between two texts.
///
/// Returns an ordered segment list covering both inputs completely:
/// concatenating Equal+Delete segments reproduces `left`, and
/// Equal+Insert segments reproduce `right`.
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffSegment> {
    if left == right {
        return vec![DiffSegment::new(DiffOp::Equal, left)];
    }

    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();

    // Trim the common prefix and suffix before the quadratic LCS
    let prefix = common_prefix(&left_lines, &right_lines);
    let suffix = common_suffix(&left_lines[prefix..], &right_lines[prefix..]);

    let left_mid = &left_lines[prefix..left_lines.len() - suffix];
    let right_mid = &right_lines[prefix..right_lines.len() - suffix];

    let mut ops: Vec<(DiffOp, &str)> = Vec::new();
    for &line in &left_lines[..prefix] {
        ops.push((DiffOp::Equal, line));
    }
    ops.extend(lcs_ops(left_mid, right_mid));
    for &line in &left_lines[left_lines.len() - suffix..] {
        ops.push((DiffOp::Equal, line));
    }

    let clusters = cluster_ops(&ops);
    let folded = fold_small_equalities(clusters);
    emit_segments(folded)
}

fn common_prefix(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[&str], b: &[&str]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Per-line ops for the middle region via a dynamic-programming LCS.
///
/// Tie-breaks in the backtrack prefer consuming from the left side, so
/// the op sequence is fully determined by the inputs.
fn lcs_ops<'a>(left: &[&'a str], right: &[&'a str]) -> Vec<(DiffOp, &'a str)> {
    let n = left.len();
    let m = right.len();
    let mut table = vec![0u32; (n + 1) * (m + 1)];
    let idx = |i: usize, j: usize| i * (m + 1) + j;

    for i in 1..=n {
        for j in 1..=m {
            table[idx(i, j)] = if left[i - 1] == right[j - 1] {
                table[idx(i - 1, j - 1)] + 1
            } else {
                table[idx(i - 1, j)].max(table[idx(i, j - 1)])
            };
        }
    }

    let mut ops: Vec<(DiffOp, &str)> = Vec::new();
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            ops.push((DiffOp::Equal, left[i - 1]));
            i -= 1;
            j -= 1;
        } else if table[idx(i - 1, j)] >= table[idx(i, j - 1)] {
            ops.push((DiffOp::Delete, left[i - 1]));
            i -= 1;
        } else {
            ops.push((DiffOp::Insert, right[j - 1]));
            j -= 1;
        }
    }
    while i > 0 {
        ops.push((DiffOp::Delete, left[i - 1]));
        i -= 1;
    }
    while j > 0 {
        ops.push((DiffOp::Insert, right[j - 1]));
        j -= 1;
    }
    ops.reverse();
    ops
}

/// A maximal run of equal lines, or a contiguous edit region holding
/// all its deleted and inserted lines together.
enum Cluster<'a> {
    Equal(Vec<&'a str>),
    Edit { del: Vec<&'a str>, ins: Vec<&'a str> },
}

fn cluster_ops<'a>(ops: &[(DiffOp, &'a str)]) -> Vec<Cluster<'a>> {
    let mut clusters: Vec<Cluster<'a>> = Vec::new();
    for &(op, line) in ops {
        match op {
            DiffOp::Equal => {
                if let Some(Cluster::Equal(lines)) = clusters.last_mut() {
                    lines.push(line);
                } else {
                    clusters.push(Cluster::Equal(vec![line]));
                }
            }
            DiffOp::Delete | DiffOp::Insert => {
                if !matches!(clusters.last(), Some(Cluster::Edit { .. })) {
                    clusters.push(Cluster::Edit {
                        del: Vec::new(),
                        ins: Vec::new(),
                    });
                }
                if let Some(Cluster::Edit { del, ins }) = clusters.last_mut() {
                    match op {
                        DiffOp::Delete => del.push(line),
                        _ => ins.push(line),
                    }
                }
            }
        }
    }
    clusters
}

/// Semantic cleanup: fold short equal runs between two edit regions
/// into one larger edit. The equal text exists on both sides, so it
/// joins both the deleted and the inserted text of the merged region.
fn fold_small_equalities(clusters: Vec<Cluster<'_>>) -> Vec<Cluster<'_>> {
    /// True when the output ends with `[Edit, small Equal]`.
    fn ends_foldable(out: &[Cluster<'_>]) -> bool {
        let small_equal = matches!(out.last(), Some(Cluster::Equal(lines))
            if lines.join("\n").trim().len() <= SEMANTIC_FOLD_LIMIT);
        small_equal
            && out.len() >= 2
            && matches!(out[out.len() - 2], Cluster::Edit { .. })
    }

    let mut out: Vec<Cluster<'_>> = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        match cluster {
            Cluster::Equal(lines) => out.push(Cluster::Equal(lines)),
            Cluster::Edit { mut del, mut ins } => {
                if ends_foldable(&out) {
                    if let (Some(Cluster::Equal(eq)), Some(Cluster::Edit { del: pd, ins: pi })) =
                        (out.pop(), out.pop())
                    {
                        let mut merged_del = pd;
                        merged_del.extend(eq.iter().copied());
                        merged_del.append(&mut del);
                        let mut merged_ins = pi;
                        merged_ins.extend(eq.iter().copied());
                        merged_ins.append(&mut ins);
                        del = merged_del;
                        ins = merged_ins;
                    }
                }
                out.push(Cluster::Edit { del, ins });
            }
        }
    }
    out
}

fn emit_segments(clusters: Vec<Cluster<'_>>) -> Vec<DiffSegment> {
    let mut segments = Vec::new();
    for cluster in clusters {
        match cluster {
            Cluster::Equal(lines) => {
                segments.push(DiffSegment::new(DiffOp::Equal, lines.join("\n")));
            }
            Cluster::Edit { del, ins } => {
                if !del.is_empty() {
                    segments.push(DiffSegment::new(DiffOp::Delete, del.join("\n")));
                }
                if !ins.is_empty() {
                    segments.push(DiffSegment::new(DiffOp::Insert, ins.join("\n")));
                }
            }
        }
    }
    segments
}
