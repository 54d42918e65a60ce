use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::node::SnapshotNode;

/// Identifier of one capture: its capture time in epoch milliseconds.
///
/// Capture times double as record identifiers in the store; the most recent
/// one is tracked as the baseline pointer for later diffs.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CaptureId(i64);

impl CaptureId {
    /// Wrap an epoch-milliseconds timestamp.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Capture the current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// The epoch-milliseconds value.
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// The capture time as a UTC datetime, if the millis value is in range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// Human-readable form, `2014-09-12 14:23:03` style (UTC).
    ///
    /// Falls back to the raw millis when out of chrono's range.
    pub fn display_time(&self) -> String {
        match self.datetime() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CaptureId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One capture event: a page snapshot tree with its time and source URL.
///
/// Serialized as a self-describing JSON document; the store keeps the tree
/// and the `{time, url}` header in separate files so listings never parse
/// whole trees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    pub time: CaptureId,
    pub url: String,
    pub tree: SnapshotNode,
}

impl Capture {
    /// Create a capture stamped with the current time.
    pub fn new(url: impl Into<String>, tree: SnapshotNode) -> Self {
        Self::at(CaptureId::now(), url, tree)
    }

    /// Create a capture with an explicit time.
    pub fn at(time: CaptureId, url: impl Into<String>, tree: SnapshotNode) -> Self {
        Self {
            time,
            url: url.into(),
            tree,
        }
    }
}
