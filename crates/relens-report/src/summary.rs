use std::fmt;

use serde::{Deserialize, Serialize};

use relens_diff::{Change, ChangeKinds};

/// Per-category tally of a change report.
///
/// A record combining STYLE and TEXT counts toward both tallies, so the sum
/// of the four counters can exceed the number of records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub styled: usize,
    pub texted: usize,
}

impl ChangeSummary {
    /// Tally an ordered change report.
    pub fn tally(changes: &[Change<'_>]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            if change.kinds.contains(ChangeKinds::ADD) {
                summary.added += 1;
            }
            if change.kinds.contains(ChangeKinds::REMOVE) {
                summary.removed += 1;
            }
            if change.kinds.contains(ChangeKinds::STYLE) {
                summary.styled += 1;
            }
            if change.kinds.contains(ChangeKinds::TEXT) {
                summary.texted += 1;
            }
        }
        summary
    }

    /// Returns `true` when every counter is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} style, {} text",
            self.added, self.removed, self.styled, self.texted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relens_diff::{diff, DiffConfig};
    use relens_snapshot::SnapshotNode;
    use relens_types::Fingerprint;

    fn fp(b: u8) -> Fingerprint {
        Fingerprint::from_hash([b; 32])
    }

    #[test]
    fn empty_report_tallies_to_zero() {
        let summary = ChangeSummary::tally(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "0 added, 0 removed, 0 style, 0 text");
    }

    #[test]
    fn combined_style_and_text_counts_toward_both() {
        let left = SnapshotNode::element("div")
            .with_style(fp(1))
            .with_children(vec![SnapshotNode::content(fp(10))]);
        let right = SnapshotNode::element("div")
            .with_style(fp(2))
            .with_children(vec![SnapshotNode::content(fp(11))]);
        let changes = diff(&left, &right, &DiffConfig::default());

        let summary = ChangeSummary::tally(&changes);
        assert_eq!(changes.len(), 1);
        assert_eq!(summary.styled, 1);
        assert_eq!(summary.texted, 1);
        assert_eq!(summary.added, 0);
        assert_eq!(summary.removed, 0);
    }

    #[test]
    fn structural_changes_count_once_each() {
        let left = SnapshotNode::element("div").with_children(vec![
            SnapshotNode::element("em"),
            SnapshotNode::element("p"),
        ]);
        let right = SnapshotNode::element("div").with_children(vec![
            SnapshotNode::element("p"),
            SnapshotNode::element("strong"),
        ]);
        let changes = diff(&left, &right, &DiffConfig::default());

        let summary = ChangeSummary::tally(&changes);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.styled, 0);
        assert_eq!(summary.texted, 0);
    }
}
