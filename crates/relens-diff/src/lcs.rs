//! Longest common subsequence over an arbitrary match predicate.
//!
//! The engine matches sibling lists with an LCS computed over the structural
//! match-candidate predicate rather than value equality. Classic O(n·m)
//! dynamic programming with a rolling pair of rows; each cell holds the best
//! matched-pair sequence ending at that index pair, so no backtracking pass
//! is needed afterwards.
//!
//! Two scan strategies are provided. Both always return a maximum-length
//! sequence; they differ only in which pairing wins when several maxima
//! exist:
//!
//! - [`lcs_head`] sweeps both lists back-to-front. On ties the propagation
//!   prefers sequences extended later in the reverse sweep, so the pairing
//!   using the head-most positions wins.
//! - [`lcs_tail`] sweeps front-to-back with the mirrored rule, so the pairing
//!   using the tail-most positions wins.
//!
//! The two strategies are not interchangeable pair-for-pair, only
//! length-for-length.

use serde::{Deserialize, Serialize};

/// Which LCS scan strategy the engine uses for sibling matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Anchor ambiguous matches toward the front of the child lists.
    #[default]
    Head,
    /// Anchor ambiguous matches toward the back of the child lists.
    Tail,
}

type PairSeq = Vec<(usize, usize)>;

/// One DP cell update, shared by both sweep directions.
///
/// `x` is the cell index within the row (sweep-relative). On a match the cell
/// takes the diagonal predecessor's sequence extended by `pair`; otherwise it
/// takes the longer of the in-row predecessor and the previous row's cell,
/// preferring the in-row predecessor on ties.
fn lcs_step(
    matched: bool,
    x: usize,
    pair: (usize, usize),
    last: &[Option<PairSeq>],
    curr: &mut [Option<PairSeq>],
) {
    if matched {
        let mut seq = if x > 0 {
            last[x - 1].clone().unwrap_or_default()
        } else {
            Vec::new()
        };
        seq.push(pair);
        curr[x] = Some(seq);
        return;
    }
    let in_row = if x > 0 { curr[x - 1].as_ref() } else { None };
    let prev_row = last[x].as_ref();
    curr[x] = match (in_row, prev_row) {
        (Some(a), Some(b)) => {
            if a.len() < b.len() {
                Some(b.clone())
            } else {
                Some(a.clone())
            }
        }
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    };
}

/// LCS with head priority: a reverse sweep over both lists.
///
/// Returns matched `(left_index, right_index)` pairs in document order.
pub fn lcs_head<T>(
    left: &[T],
    right: &[T],
    matches: impl Fn(&T, &T) -> bool,
) -> Vec<(usize, usize)> {
    let m = right.len();
    if left.is_empty() || m == 0 {
        return Vec::new();
    }
    let mut last: Vec<Option<PairSeq>> = vec![None; m];
    let mut curr: Vec<Option<PairSeq>> = vec![None; m];
    for li in (0..left.len()).rev() {
        for ri in (0..m).rev() {
            let x = m - ri - 1;
            lcs_step(matches(&left[li], &right[ri]), x, (li, ri), &last, &mut curr);
        }
        std::mem::swap(&mut last, &mut curr);
        curr.iter_mut().for_each(|cell| *cell = None);
    }
    // The reverse sweep accumulates pairs back-to-front.
    let mut pairs = last[m - 1].take().unwrap_or_default();
    pairs.reverse();
    pairs
}

/// LCS with tail priority: a forward sweep over both lists.
///
/// Returns matched `(left_index, right_index)` pairs in document order.
pub fn lcs_tail<T>(
    left: &[T],
    right: &[T],
    matches: impl Fn(&T, &T) -> bool,
) -> Vec<(usize, usize)> {
    let m = right.len();
    if left.is_empty() || m == 0 {
        return Vec::new();
    }
    let mut last: Vec<Option<PairSeq>> = vec![None; m];
    let mut curr: Vec<Option<PairSeq>> = vec![None; m];
    for li in 0..left.len() {
        for ri in 0..m {
            lcs_step(matches(&left[li], &right[ri]), ri, (li, ri), &last, &mut curr);
        }
        std::mem::swap(&mut last, &mut curr);
        curr.iter_mut().for_each(|cell| *cell = None);
    }
    last[m - 1].take().unwrap_or_default()
}

impl Priority {
    /// Run the strategy this priority selects.
    pub fn lcs<T>(
        &self,
        left: &[T],
        right: &[T],
        matches: impl Fn(&T, &T) -> bool,
    ) -> Vec<(usize, usize)> {
        match self {
            Self::Head => lcs_head(left, right, matches),
            Self::Tail => lcs_tail(left, right, matches),
        }
    }
}
