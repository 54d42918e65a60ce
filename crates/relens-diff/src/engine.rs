//! The recursive diff walk over two snapshot trees.

use relens_snapshot::SnapshotNode;
use serde::{Deserialize, Serialize};

use crate::change::{Change, ChangeKinds};
use crate::lcs::Priority;

/// Configuration for one diff invocation.
///
/// An explicit immutable value passed at each call site; the engine holds no
/// process-wide state. The change-kind encoding is fixed by [`ChangeKinds`]
/// and is not part of the config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// LCS scan strategy for sibling matching.
    pub priority: Priority,
}

/// The structural match-candidate predicate.
///
/// Two nodes may be paired iff their names are equal and their attribute maps
/// are exactly equal (key and value, no coercion). Content leaves only match
/// content leaves, which falls out of name equality. Text and style never
/// participate: a paired node with different content is a content *change*,
/// not a different node.
pub fn is_match_candidate(left: &SnapshotNode, right: &SnapshotNode) -> bool {
    left.name == right.name && left.attr == right.attr
}

/// Diff two snapshot trees.
///
/// `left` is the older snapshot, `right` the newer. The two roots are assumed
/// to correspond; the engine compares them as a pair without remapping even
/// if the caller hands it unrelated trees.
///
/// For every corresponding element pair the output contains, in order:
///
/// 1. recursive results for matched element children, in document order;
/// 2. the pair's own aggregate record (STYLE and/or TEXT), if non-empty;
/// 3. one ADD record per unmatched element child of `right`, in `right`'s
///    document order, each referencing the whole unrecursed subtree;
/// 4. one REMOVE record per unmatched element child of `left`, in `left`'s
///    document order.
///
/// Unmatched *content* children do not produce structural records: a text run
/// appearing or disappearing is folded into the parent's TEXT flag in both
/// directions. This aggregation is deliberate report policy, and downstream
/// highlight layering depends on the exact ordering above.
///
/// The engine never fails on well-formed trees and tolerates nodes without a
/// rect throughout.
pub fn diff<'t>(
    left: &'t SnapshotNode,
    right: &'t SnapshotNode,
    config: &DiffConfig,
) -> Vec<Change<'t>> {
    let mut out = Vec::new();
    diff_pair(left, right, config, &mut out);
    out
}

/// Diff one corresponding pair, appending its report to `out`.
fn diff_pair<'t>(
    left: &'t SnapshotNode,
    right: &'t SnapshotNode,
    config: &DiffConfig,
    out: &mut Vec<Change<'t>>,
) {
    let mut aggregate = ChangeKinds::EMPTY;
    if !left.style.matches(&right.style) {
        aggregate |= ChangeKinds::STYLE;
    }

    let pairs = config
        .priority
        .lcs(&left.children, &right.children, is_match_candidate);

    // Matched-ness lives in these side tables for the duration of this pair;
    // the snapshot trees themselves are never marked.
    let mut left_matched = vec![false; left.children.len()];
    let mut right_matched = vec![false; right.children.len()];

    let mut nested = Vec::new();
    for &(li, ri) in &pairs {
        left_matched[li] = true;
        right_matched[ri] = true;
        let old = &left.children[li];
        let new = &right.children[ri];
        if new.is_content() {
            // Paired leaf with different content: a content change of the
            // parent, never a record of its own.
            if !old.text.matches(&new.text) {
                aggregate |= ChangeKinds::TEXT;
            }
        } else {
            diff_pair(old, new, config, &mut nested);
        }
    }

    let mut added = Vec::new();
    for (ri, node) in right.children.iter().enumerate() {
        if !right_matched[ri] {
            if node.is_content() {
                // Content addition counts as a content change of the parent.
                aggregate |= ChangeKinds::TEXT;
            } else {
                added.push(Change::new(ChangeKinds::ADD, node));
            }
        }
    }

    let mut removed = Vec::new();
    for (li, node) in left.children.iter().enumerate() {
        if !left_matched[li] {
            if node.is_content() {
                aggregate |= ChangeKinds::TEXT;
            } else {
                removed.push(Change::new(ChangeKinds::REMOVE, node));
            }
        }
    }

    out.extend(nested);
    if !aggregate.is_empty() {
        out.push(Change::new(aggregate, right));
    }
    out.extend(added);
    out.extend(removed);
}
