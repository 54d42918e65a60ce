use serde::{Deserialize, Serialize};

use relens_diff::ChangeKinds;

/// Visual style for one category of highlight box.
///
/// Values are CSS strings handed through to the external highlight renderer
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightStyle {
    pub title: String,
    pub background_color: String,
    pub border_color: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<String>,
}

/// Change-kind → visual style mapping for the highlight renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightTheme {
    pub add: HighlightStyle,
    pub remove: HighlightStyle,
    pub style: HighlightStyle,
    pub text: HighlightStyle,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self {
            add: HighlightStyle {
                title: "Added".into(),
                background_color: "rgba(127, 255, 127, 0.3)".into(),
                border_color: "#090".into(),
                color: "#060".into(),
                text_shadow: Some("0 1px 1px rgba(0, 0, 0, 0.3)".into()),
            },
            remove: HighlightStyle {
                title: "Removed".into(),
                background_color: "rgba(0, 0, 0, 0.5)".into(),
                border_color: "#999".into(),
                color: "#fff".into(),
                text_shadow: None,
            },
            style: HighlightStyle {
                title: "Style".into(),
                background_color: "rgba(255, 0, 0, 0.3)".into(),
                border_color: "#f00".into(),
                color: "#f00".into(),
                text_shadow: None,
            },
            text: HighlightStyle {
                title: "Text".into(),
                background_color: "rgba(255, 255, 0, 0.3)".into(),
                border_color: "#f90".into(),
                color: "#c30".into(),
                text_shadow: None,
            },
        }
    }
}

impl HighlightTheme {
    /// The style used for a record's highlight box.
    ///
    /// Structural records and pure text records get their category's style;
    /// any record carrying STYLE (alone or combined with TEXT) is drawn in
    /// the style category, which visually dominates.
    pub fn for_kinds(&self, kinds: ChangeKinds) -> &HighlightStyle {
        if kinds.contains(ChangeKinds::ADD) {
            &self.add
        } else if kinds.contains(ChangeKinds::REMOVE) {
            &self.remove
        } else if kinds.contains(ChangeKinds::STYLE) {
            &self.style
        } else {
            &self.text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_styles_are_selected_by_flag() {
        let theme = HighlightTheme::default();
        assert_eq!(theme.for_kinds(ChangeKinds::ADD).title, "Added");
        assert_eq!(theme.for_kinds(ChangeKinds::REMOVE).title, "Removed");
        assert_eq!(theme.for_kinds(ChangeKinds::STYLE).title, "Style");
        assert_eq!(theme.for_kinds(ChangeKinds::TEXT).title, "Text");
    }

    #[test]
    fn style_dominates_combined_records() {
        let theme = HighlightTheme::default();
        let combined = ChangeKinds::STYLE | ChangeKinds::TEXT;
        assert_eq!(theme.for_kinds(combined).title, "Style");
    }
}
