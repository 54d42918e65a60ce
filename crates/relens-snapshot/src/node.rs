use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use relens_types::{Fingerprint, Rect};

/// Attribute allow-list mapping captured for an element.
///
/// Ordered map so that serialization and equality are deterministic.
pub type AttrMap = BTreeMap<String, String>;

/// Structural validation errors for snapshot trees.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// A content leaf carried children.
    #[error("content node at depth {depth} has {count} children")]
    ContentWithChildren { depth: usize, count: usize },
}

/// Name of a snapshot node: an element tag, or the content-leaf sentinel.
///
/// Content leaves stand in for text runs and media pixels; they are persisted
/// with the name `"#"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeName {
    /// An element, identified by its lowercased tag name.
    Element(String),
    /// A content leaf (text or media), persisted as `"#"`.
    Content,
}

impl NodeName {
    /// The persisted sentinel for content leaves.
    pub const CONTENT_SENTINEL: &'static str = "#";

    /// Parse from the persisted string form.
    pub fn parse(s: &str) -> Self {
        if s == Self::CONTENT_SENTINEL {
            Self::Content
        } else {
            Self::Element(s.to_string())
        }
    }

    /// The persisted string form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Element(tag) => tag,
            Self::Content => Self::CONTENT_SENTINEL,
        }
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// One node of a snapshot tree.
///
/// Built once per capture by the external walk, then read-only: the diff
/// engine never mutates a snapshot. `text` is only meaningful on content
/// leaves; `style` carries [`Fingerprint::Skipped`] when style was
/// intentionally not computed. A missing `rect` means the element was not
/// rendered.
///
/// Children are in document order, and order is significant to diffing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub name: NodeName,
    #[serde(default, skip_serializing_if = "Fingerprint::is_skipped")]
    pub text: Fingerprint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<AttrMap>,
    #[serde(default, skip_serializing_if = "Fingerprint::is_skipped")]
    pub style: Fingerprint,
    #[serde(rename = "child", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    /// Create an element node with no attributes, style, or children.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            name: NodeName::Element(tag.into()),
            text: Fingerprint::Skipped,
            rect: None,
            attr: None,
            style: Fingerprint::Skipped,
            children: Vec::new(),
        }
    }

    /// Create a content leaf carrying a text or media fingerprint.
    pub fn content(text: Fingerprint) -> Self {
        Self {
            name: NodeName::Content,
            text,
            rect: None,
            attr: None,
            style: Fingerprint::Skipped,
            children: Vec::new(),
        }
    }

    /// Builder: set the bounding rect.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Builder: set the attribute map. An empty map is stored as `None`.
    pub fn with_attr(mut self, attr: AttrMap) -> Self {
        self.attr = if attr.is_empty() { None } else { Some(attr) };
        self
    }

    /// Builder: set the style fingerprint.
    pub fn with_style(mut self, style: Fingerprint) -> Self {
        self.style = style;
        self
    }

    /// Builder: set the ordered children.
    pub fn with_children(mut self, children: Vec<SnapshotNode>) -> Self {
        debug_assert!(!self.is_content() || children.is_empty());
        self.children = children;
        self
    }

    /// Returns `true` for content leaves.
    pub fn is_content(&self) -> bool {
        self.name == NodeName::Content
    }

    /// Number of nodes in this subtree, including this node.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(SnapshotNode::subtree_len)
            .sum::<usize>()
    }

    /// Check the structural invariants of the whole subtree.
    ///
    /// The only invariant a well-formed producer can break is attaching
    /// children to a content leaf; deserialized input is checked before use.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        self.validate_at(0)
    }

    fn validate_at(&self, depth: usize) -> Result<(), SnapshotError> {
        if self.is_content() && !self.children.is_empty() {
            return Err(SnapshotError::ContentWithChildren {
                depth,
                count: self.children.len(),
            });
        }
        for child in &self.children {
            child.validate_at(depth + 1)?;
        }
        Ok(())
    }
}
