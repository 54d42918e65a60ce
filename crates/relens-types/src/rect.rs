use serde::{Deserialize, Serialize};

/// Position and size of a rendered element, relative to the page origin.
///
/// Coordinates are floored to whole pixels by the capture pipeline. A missing
/// rect on a snapshot node means the element was not rendered; diffing and
/// reporting tolerate that everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a rect from origin and size.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// This rect shifted by `(dx, dy)`.
    ///
    /// Used by the report layer to rebase page-absolute rects onto a capture
    /// surface whose root origin is not `(0, 0)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Returns `true` if the rect covers no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_shifts_origin_only() {
        let r = Rect::new(10, 20, 300, 80);
        let t = r.translate(-4, 6);
        assert_eq!(t, Rect::new(6, 26, 300, 80));
    }

    #[test]
    fn empty_when_either_side_is_zero() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn display_format() {
        assert_eq!(Rect::new(-3, 7, 120, 18).to_string(), "-3,7 120x18");
    }

    #[test]
    fn serde_roundtrip() {
        let r = Rect::new(1, 2, 3, 4);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"width":3,"height":4}"#);
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
