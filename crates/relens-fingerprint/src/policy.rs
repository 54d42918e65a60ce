//! Walk policy: which elements and attributes the capture pipeline looks at.
//!
//! The DOM walk itself runs in the browser and is external to this workspace;
//! this module defines the configuration it follows and the attribute
//! filtering it applies, so both sides agree on exactly what gets captured.

use serde::{Deserialize, Serialize};

use relens_snapshot::AttrMap;

use crate::style::StylePolicy;

/// Configuration for the browser-side snapshot walk.
///
/// The selector lists are matched against elements by the walker; they are
/// carried here so one config file drives the whole capture pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkPolicy {
    /// Tags skipped entirely (no node emitted for them or their subtree).
    pub invisible_elements: Vec<String>,
    /// Tags whose subtree is replaced by a single content leaf over their
    /// rendered content (img, canvas, form controls, ...).
    pub opaque_elements: Vec<String>,
    /// Computed-style property allow-list.
    pub style_properties: StylePolicy,
    /// Attribute allow-list used for element identity.
    pub attributes: Vec<String>,
    /// Elements removed from the page before walking.
    pub remove_selectors: Vec<String>,
    /// Elements excluded from the snapshot.
    pub exclude_selectors: Vec<String>,
    /// Elements whose content changes are ignored.
    pub ignore_text_selectors: Vec<String>,
    /// Elements whose style is intentionally not fingerprinted.
    pub ignore_style_selectors: Vec<String>,
    /// Elements treated as opaque by selector rather than by tag.
    pub ignore_children_selectors: Vec<String>,
    /// Selector of the capture root.
    pub root: String,
}

impl Default for WalkPolicy {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            invisible_elements: strings(&[
                "applet", "area", "audio", "base", "basefont", "bdi", "bdo", "big", "br",
                "center", "colgroup", "datalist", "form", "frameset", "head", "link", "map",
                "meta", "noframes", "noscript", "optgroup", "option", "param", "rp", "rt",
                "ruby", "script", "source", "style", "title", "track", "xmp",
            ]),
            opaque_elements: strings(&[
                "img", "canvas", "input", "textarea", "audio", "video", "hr", "embed",
                "object", "progress", "select", "table",
            ]),
            style_properties: StylePolicy::default(),
            attributes: strings(&["id", "class"]),
            remove_selectors: Vec::new(),
            exclude_selectors: Vec::new(),
            ignore_text_selectors: Vec::new(),
            ignore_style_selectors: Vec::new(),
            ignore_children_selectors: Vec::new(),
            root: "body".to_string(),
        }
    }
}

impl WalkPolicy {
    /// Whether a tag is skipped entirely.
    pub fn is_invisible(&self, tag: &str) -> bool {
        self.invisible_elements
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether a tag's subtree is captured as a single content leaf.
    pub fn is_opaque(&self, tag: &str) -> bool {
        self.opaque_elements
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Filter raw element attributes down to the allow-list.
    ///
    /// `input` elements additionally capture their `type`: a text field and a
    /// checkbox are different things even with identical id/class. Returns
    /// `None` when no allow-listed attribute is present, matching the
    /// snapshot model's "absent rather than empty" rule.
    pub fn attr_map(&self, tag: &str, raw: &AttrMap) -> Option<AttrMap> {
        let extra = if tag.eq_ignore_ascii_case("input") {
            Some("type")
        } else {
            None
        };
        let filtered: AttrMap = self
            .attributes
            .iter()
            .map(String::as_str)
            .chain(extra)
            .filter_map(|key| raw.get(key).map(|v| (key.to_string(), v.clone())))
            .collect();
        if filtered.is_empty() {
            None
        } else {
            Some(filtered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn invisible_lookup_is_case_insensitive() {
        let policy = WalkPolicy::default();
        assert!(policy.is_invisible("script"));
        assert!(policy.is_invisible("SCRIPT"));
        assert!(!policy.is_invisible("div"));
    }

    #[test]
    fn opaque_covers_media_and_controls() {
        let policy = WalkPolicy::default();
        assert!(policy.is_opaque("img"));
        assert!(policy.is_opaque("TABLE"));
        assert!(!policy.is_opaque("span"));
    }

    #[test]
    fn attr_map_filters_to_allow_list() {
        let policy = WalkPolicy::default();
        let attrs = raw(&[("id", "main"), ("class", "hero"), ("data-x", "1")]);
        let filtered = policy.attr_map("div", &attrs).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get("id").unwrap(), "main");
        assert!(!filtered.contains_key("data-x"));
    }

    #[test]
    fn attr_map_empty_becomes_none() {
        let policy = WalkPolicy::default();
        assert_eq!(policy.attr_map("div", &raw(&[("data-x", "1")])), None);
        assert_eq!(policy.attr_map("div", &AttrMap::new()), None);
    }

    #[test]
    fn input_elements_capture_type() {
        let policy = WalkPolicy::default();
        let attrs = raw(&[("type", "checkbox")]);
        let filtered = policy.attr_map("input", &attrs).unwrap();
        assert_eq!(filtered.get("type").unwrap(), "checkbox");
        // Other tags do not.
        assert_eq!(policy.attr_map("a", &attrs), None);
    }

    #[test]
    fn policy_roundtrips_through_toml() {
        let policy = WalkPolicy::default();
        let text = toml::to_string(&policy).unwrap();
        let back: WalkPolicy = toml::from_str(&text).unwrap();
        assert_eq!(back, policy);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let policy: WalkPolicy = toml::from_str(r#"root = "main""#).unwrap();
        assert_eq!(policy.root, "main");
        assert!(policy.is_invisible("script"));
    }
}
