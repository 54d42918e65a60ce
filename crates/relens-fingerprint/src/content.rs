//! Content leaf fingerprints: text runs and media pixels.

use relens_types::Fingerprint;

use crate::hasher::FingerprintHasher;

/// Collapse whitespace runs to a single space and trim the ends.
///
/// Rendered text is insensitive to the exact whitespace in the markup, so the
/// fingerprint must be too.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Fingerprint a text run.
///
/// Returns `None` for text that is empty after whitespace collapsing; the
/// walk drops such runs rather than emitting empty content leaves.
pub fn text_fingerprint(text: &str) -> Option<Fingerprint> {
    let collapsed = collapse_whitespace(text);
    if collapsed.is_empty() {
        return None;
    }
    Some(Fingerprint::Digest(
        FingerprintHasher::TEXT.hash(collapsed.as_bytes()),
    ))
}

/// Fingerprint rendered media content (e.g. decoded image pixels).
///
/// Callers that fail to fetch or decode the content record the leaf as
/// [`Fingerprint::Unknown`] instead of calling this; an unreachable image must
/// not abort the walk, and must never silently compare equal later.
pub fn media_fingerprint(pixels: &[u8]) -> Fingerprint {
    Fingerprint::Digest(FingerprintHasher::MEDIA.hash(pixels))
}
