use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use relens_snapshot::SnapshotNode;

/// The set of change classifications carried by one [`Change`] record.
///
/// Four named flags, each a distinct bit so one record can combine them:
///
/// - [`ChangeKinds::ADD`] / [`ChangeKinds::REMOVE`] — structural records for a
///   whole unmatched subtree. Mutually exclusive per record: the engine emits
///   a node as either added or removed, never both.
/// - [`ChangeKinds::STYLE`] / [`ChangeKinds::TEXT`] — an element's own delta,
///   summarized on its aggregate record. These may co-occur.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeKinds(u8);

impl ChangeKinds {
    /// No classification.
    pub const EMPTY: Self = Self(0);
    /// An element subtree present only in the newer snapshot.
    pub const ADD: Self = Self(1);
    /// An element subtree present only in the older snapshot.
    pub const REMOVE: Self = Self(2);
    /// The element's own style fingerprint changed.
    pub const STYLE: Self = Self(4);
    /// Content under the element changed (text edited, added, or removed).
    pub const TEXT: Self = Self(8);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::ADD, "ADD"),
        (Self::REMOVE, "REMOVE"),
        (Self::STYLE, "STYLE"),
        (Self::TEXT, "TEXT"),
    ];

    /// Returns `true` if no flag is set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    pub fn contains(&self, other: ChangeKinds) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` for structural (ADD or REMOVE) records.
    pub fn is_structural(&self) -> bool {
        self.contains(Self::ADD) || self.contains(Self::REMOVE)
    }

    /// The raw bit representation (ADD=1, REMOVE=2, STYLE=4, TEXT=8).
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl BitOr for ChangeKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ChangeKinds {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for ChangeKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ChangeKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One entry of a change report.
///
/// Borrows the referenced node from the input snapshot: for structural
/// records the whole unmatched subtree, for aggregate records the element
/// (from the newer snapshot) whose own style/text delta is being summarized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Change<'t> {
    pub kinds: ChangeKinds,
    pub node: &'t SnapshotNode,
}

impl<'t> Change<'t> {
    pub fn new(kinds: ChangeKinds, node: &'t SnapshotNode) -> Self {
        Self { kinds, node }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_bit_disjoint() {
        let all = [
            ChangeKinds::ADD,
            ChangeKinds::REMOVE,
            ChangeKinds::STYLE,
            ChangeKinds::TEXT,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(a.bits().is_power_of_two());
            for b in &all[i + 1..] {
                assert_eq!(a.bits() & b.bits(), 0);
            }
        }
    }

    #[test]
    fn combine_and_contains() {
        let mut kinds = ChangeKinds::EMPTY;
        assert!(kinds.is_empty());
        kinds |= ChangeKinds::STYLE;
        kinds |= ChangeKinds::TEXT;
        assert!(kinds.contains(ChangeKinds::STYLE));
        assert!(kinds.contains(ChangeKinds::STYLE | ChangeKinds::TEXT));
        assert!(!kinds.contains(ChangeKinds::ADD));
        assert!(!kinds.is_structural());
        assert!((ChangeKinds::ADD).is_structural());
    }

    #[test]
    fn debug_names_flags() {
        assert_eq!(format!("{:?}", ChangeKinds::EMPTY), "(none)");
        assert_eq!(format!("{:?}", ChangeKinds::ADD), "ADD");
        assert_eq!(
            format!("{}", ChangeKinds::STYLE | ChangeKinds::TEXT),
            "STYLE|TEXT"
        );
    }

    #[test]
    fn serde_uses_raw_bits() {
        let kinds = ChangeKinds::STYLE | ChangeKinds::TEXT;
        assert_eq!(serde_json::to_string(&kinds).unwrap(), "12");
        let back: ChangeKinds = serde_json::from_str("12").unwrap();
        assert_eq!(back, kinds);
    }
}
