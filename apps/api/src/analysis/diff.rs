//! Line Diff Engine — minimal line-level edit script via LCS.

use serde::{Deserialize, Serialize};

/// One line-level edit operation.
///
/// A diff is a valid edit script: the `equal`+`delete` subsequence
/// reconstructs the base text and `equal`+`insert` reconstructs the
/// current text, in original line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "line", rename_all = "lowercase")]
pub enum DiffOp {
    Equal(String),
    Delete(String),
    Insert(String),
}

/// Computes a line-level diff between `base` and `current` using the
/// classic O(n·m) longest-common-subsequence dynamic program. Callers
/// should bound input to résumé-sized documents; there is no internal
/// timeout.
pub fn diff_lines(base: &str, current: &str) -> Vec<DiffOp> {
    let a: Vec<&str> = base.split('\n').collect();
    let b: Vec<&str> = current.split('\n').collect();

    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);
    for (x, y) in lcs_pairs(&a, &b) {
        while i < x {
            ops.push(DiffOp::Delete(a[i].to_string()));
            i += 1;
        }
        while j < y {
            ops.push(DiffOp::Insert(b[j].to_string()));
            j += 1;
        }
        ops.push(DiffOp::Equal(a[i].to_string()));
        i += 1;
        j += 1;
    }
    while i < a.len() {
        ops.push(DiffOp::Delete(a[i].to_string()));
        i += 1;
    }
    while j < b.len() {
        ops.push(DiffOp::Insert(b[j].to_string()));
        j += 1;
    }
    ops
}

/// Matched (base, current) index pairs of one longest common
/// subsequence, in increasing order on both sides.
fn lcs_pairs(a: &[&str], b: &[&str]) -> Vec<(usize, usize)> {
    let (n, m) = (a.len(), b.len());
    let mut table = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}
