//! Computed-style fingerprints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use relens_types::Fingerprint;

use crate::hasher::FingerprintHasher;

/// Positional properties folded in when an element is out of normal flow.
const POSITIONAL_PROPERTIES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Size properties suppressed for opaque elements.
///
/// Opaque elements (img, canvas, ...) are fingerprinted through a single
/// content leaf; their box size is already captured by the rect and would
/// otherwise double-report media swaps as style changes.
const SIZE_PROPERTIES: [&str; 2] = ["width", "height"];

/// The computed-style property allow-list.
///
/// Fingerprints cover exactly these properties, in this order, so captures
/// taken with the same policy are comparable and captures taken with a
/// different policy are not accidentally so.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StylePolicy {
    pub properties: Vec<String>,
}

impl StylePolicy {
    /// Policy over an explicit property list.
    pub fn new(properties: Vec<String>) -> Self {
        Self { properties }
    }
}

impl Default for StylePolicy {
    /// The stock allow-list: box model, borders, backgrounds, typography,
    /// and the layout properties that move content.
    fn default() -> Self {
        Self::new(
            [
                "margin-left",
                "margin-top",
                "margin-right",
                "margin-bottom",
                "border-left-color",
                "border-left-style",
                "border-left-width",
                "border-top-color",
                "border-top-style",
                "border-top-width",
                "border-right-color",
                "border-right-style",
                "border-right-width",
                "border-bottom-color",
                "border-bottom-style",
                "border-bottom-width",
                "border-top-left-radius",
                "border-top-right-radius",
                "border-bottom-left-radius",
                "border-bottom-right-radius",
                "padding-left",
                "padding-top",
                "padding-right",
                "padding-bottom",
                "background-color",
                "background-image",
                "background-repeat",
                "background-size",
                "background-position",
                "list-style-image",
                "list-style-position",
                "list-style-type",
                "outline-color",
                "outline-style",
                "outline-width",
                "font-size",
                "font-family",
                "font-weight",
                "font-style",
                "line-height",
                "box-shadow",
                "clear",
                "color",
                "display",
                "float",
                "opacity",
                "text-align",
                "text-decoration",
                "text-indent",
                "text-shadow",
                "vertical-align",
                "visibility",
                "position",
                "width",
                "height",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}

/// Fingerprint an element's computed style.
///
/// `computed` is the property → value map extracted by the browser-side walk.
/// Elements that are not rendered (`display:none`, `opacity:0`,
/// `visibility:hidden`) get [`Fingerprint::Skipped`]: there is nothing on
/// screen to regress against.
///
/// When `position` is not `static`, the positional properties are appended to
/// the allow-list — an absolutely positioned element that moved is a style
/// change even if every allow-listed property is untouched. When
/// `suppress_size` is set (opaque elements), width and height are excluded.
///
/// Missing properties hash as empty values, keeping the field count fixed for
/// a given policy.
pub fn style_fingerprint(
    computed: &BTreeMap<String, String>,
    policy: &StylePolicy,
    suppress_size: bool,
) -> Fingerprint {
    let get = |key: &str| computed.get(key).map(String::as_str).unwrap_or("");

    if get("display") == "none" || get("opacity") == "0" || get("visibility") == "hidden" {
        return Fingerprint::Skipped;
    }

    let positioned = !matches!(get("position"), "" | "static");
    let fields = policy
        .properties
        .iter()
        .map(String::as_str)
        .filter(|prop| !(suppress_size && SIZE_PROPERTIES.contains(prop)))
        .chain(
            POSITIONAL_PROPERTIES
                .iter()
                .copied()
                .filter(|_| positioned),
        )
        .map(get);

    Fingerprint::Digest(FingerprintHasher::STYLE.hash_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computed(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn small_policy() -> StylePolicy {
        StylePolicy::new(vec![
            "color".into(),
            "display".into(),
            "position".into(),
            "width".into(),
            "height".into(),
        ])
    }

    #[test]
    fn same_style_same_fingerprint() {
        let policy = small_policy();
        let style = computed(&[("color", "red"), ("display", "block")]);
        let a = style_fingerprint(&style, &policy, false);
        let b = style_fingerprint(&style, &policy, false);
        assert_eq!(a, b);
        assert!(a.matches(&b));
    }

    #[test]
    fn changed_property_changes_fingerprint() {
        let policy = small_policy();
        let red = style_fingerprint(&computed(&[("color", "red")]), &policy, false);
        let blue = style_fingerprint(&computed(&[("color", "blue")]), &policy, false);
        assert!(!red.matches(&blue));
    }

    #[test]
    fn property_outside_allow_list_is_ignored() {
        let policy = small_policy();
        let a = style_fingerprint(&computed(&[("color", "red")]), &policy, false);
        let b = style_fingerprint(
            &computed(&[("color", "red"), ("z-index", "40")]),
            &policy,
            false,
        );
        assert!(a.matches(&b));
    }

    #[test]
    fn invisible_elements_are_skipped() {
        let policy = small_policy();
        for hidden in [
            computed(&[("display", "none")]),
            computed(&[("opacity", "0")]),
            computed(&[("visibility", "hidden")]),
        ] {
            assert_eq!(
                style_fingerprint(&hidden, &policy, false),
                Fingerprint::Skipped
            );
        }
    }

    #[test]
    fn positioned_elements_include_offsets() {
        let policy = small_policy();
        let at_top = computed(&[("position", "absolute"), ("top", "0px")]);
        let lower = computed(&[("position", "absolute"), ("top", "50px")]);
        let a = style_fingerprint(&at_top, &policy, false);
        let b = style_fingerprint(&lower, &policy, false);
        assert!(!a.matches(&b));
    }

    #[test]
    fn static_elements_ignore_offsets() {
        let policy = small_policy();
        let a = style_fingerprint(&computed(&[("top", "0px")]), &policy, false);
        let b = style_fingerprint(&computed(&[("top", "50px")]), &policy, false);
        assert!(a.matches(&b));
    }

    #[test]
    fn suppress_size_drops_width_and_height() {
        let policy = small_policy();
        let narrow = computed(&[("width", "100px"), ("height", "40px")]);
        let wide = computed(&[("width", "300px"), ("height", "40px")]);
        assert!(!style_fingerprint(&narrow, &policy, false)
            .matches(&style_fingerprint(&wide, &policy, false)));
        assert!(style_fingerprint(&narrow, &policy, true)
            .matches(&style_fingerprint(&wide, &policy, true)));
    }

    #[test]
    fn default_policy_is_stable() {
        let policy = StylePolicy::default();
        assert!(policy.properties.iter().any(|p| p == "background-color"));
        assert!(policy.properties.iter().any(|p| p == "position"));
        // The allow-list order feeds the hash, so Default must not reorder.
        assert_eq!(policy.properties[0], "margin-left");
    }
}
