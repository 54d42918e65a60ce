use serde::{Deserialize, Serialize};

use relens_diff::{Change, ChangeKinds};
use relens_types::Rect;

use crate::theme::{HighlightStyle, HighlightTheme};

/// Which capture surface an overlay is drawn on.
///
/// Removed elements only exist in the older capture, so they are highlighted
/// on its screenshot; every other category is drawn on the newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Left,
    Right,
}

/// Root origin of one capture, subtracted from page-absolute rects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One highlight box, ready for the external renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay<'a> {
    pub rect: Rect,
    pub surface: Surface,
    pub kinds: ChangeKinds,
    pub style: &'a HighlightStyle,
}

/// Plan highlight overlays for an ordered change report.
///
/// Overlays keep the report's order, which downstream layering relies on.
/// Records whose node has no rect (element not rendered) produce no overlay;
/// their classification still counts in the summary.
pub fn plan_overlays<'a>(
    changes: &[Change<'_>],
    left_offset: Offset,
    right_offset: Offset,
    theme: &'a HighlightTheme,
) -> Vec<Overlay<'a>> {
    changes
        .iter()
        .filter_map(|change| {
            let rect = change.node.rect?;
            let (surface, offset) = if change.kinds.contains(ChangeKinds::REMOVE) {
                (Surface::Left, left_offset)
            } else {
                (Surface::Right, right_offset)
            };
            Some(Overlay {
                rect: rect.translate(-offset.x, -offset.y),
                surface,
                kinds: change.kinds,
                style: theme.for_kinds(change.kinds),
            })
        })
        .collect()
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

    fn tree_pair() -> (SnapshotNode, SnapshotNode) {
        let left = SnapshotNode::element("div")
            .with_rect(Rect::new(8, 8, 600, 400))
            .with_style(fp(1))
            .with_children(vec![SnapshotNode::element("em").with_rect(Rect::new(20, 30, 40, 10))]);
        let right = SnapshotNode::element("div")
            .with_rect(Rect::new(8, 8, 600, 400))
            .with_style(fp(2))
            .with_children(vec![SnapshotNode::element("strong")
                .with_rect(Rect::new(20, 30, 50, 10))]);
        (left, right)
    }

    #[test]
    fn removes_go_left_everything_else_right() {
        let (left, right) = tree_pair();
        let changes = diff(&left, &right, &DiffConfig::default());
        let theme = HighlightTheme::default();
        let overlays = plan_overlays(&changes, Offset::default(), Offset::default(), &theme);

        // STYLE aggregate, ADD, REMOVE — in report order.
        assert_eq!(overlays.len(), 3);
        assert_eq!(overlays[0].surface, Surface::Right);
        assert_eq!(overlays[1].surface, Surface::Right);
        assert_eq!(overlays[2].surface, Surface::Left);
        assert_eq!(overlays[2].kinds, ChangeKinds::REMOVE);
    }

    #[test]
    fn offsets_rebase_rects_per_surface() {
        let (left, right) = tree_pair();
        let changes = diff(&left, &right, &DiffConfig::default());
        let theme = HighlightTheme::default();
        let overlays = plan_overlays(&changes, Offset::new(8, 8), Offset::new(4, 0), &theme);

        // Right-surface aggregate rect rebased by the right offset.
        assert_eq!(overlays[0].rect, Rect::new(4, 8, 600, 400));
        // Left-surface remove rect rebased by the left offset.
        assert_eq!(overlays[2].rect, Rect::new(12, 22, 40, 10));
    }

    #[test]
    fn nodes_without_rect_are_skipped() {
        let left = SnapshotNode::element("div").with_style(fp(1));
        let right = SnapshotNode::element("div").with_style(fp(2));
        let changes = diff(&left, &right, &DiffConfig::default());
        assert_eq!(changes.len(), 1);

        let theme = HighlightTheme::default();
        let overlays = plan_overlays(&changes, Offset::default(), Offset::default(), &theme);
        assert!(overlays.is_empty());
    }

    #[test]
    fn overlay_style_follows_theme_mapping() {
        let (left, right) = tree_pair();
        let changes = diff(&left, &right, &DiffConfig::default());
        let theme = HighlightTheme::default();
        let overlays = plan_overlays(&changes, Offset::default(), Offset::default(), &theme);
        assert_eq!(overlays[0].style.title, "Style");
        assert_eq!(overlays[1].style.title, "Added");
        assert_eq!(overlays[2].style.title, "Removed");
    }
}
