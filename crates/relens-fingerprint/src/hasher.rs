use relens_types::Digest;

/// Domain-separated BLAKE3 content hasher.
///
/// Each hasher carries a domain tag (e.g. `"relens-style-v1"`) that is
/// prepended to every hash computation. This prevents cross-kind collisions:
/// a style list and a text run with identical bytes produce different digests,
/// so a style fingerprint can never accidentally equal a text fingerprint.
pub struct FingerprintHasher {
    domain: &'static str,
}

impl FingerprintHasher {
    /// Hasher for computed-style fingerprints.
    pub const STYLE: Self = Self {
        domain: "relens-style-v1",
    };
    /// Hasher for text content fingerprints.
    pub const TEXT: Self = Self {
        domain: "relens-text-v1",
    };
    /// Hasher for media (rendered pixel) fingerprints.
    pub const MEDIA: Self = Self {
        domain: "relens-media-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Digest::from_hash(*hasher.finalize().as_bytes())
    }

    /// Hash a sequence of string fields, `~`-separated.
    ///
    /// The separator keeps adjacent fields from concatenating into the same
    /// byte stream (`["ab", "c"]` vs `["a", "bc"]`).
    pub fn hash_fields<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                hasher.update(b"~");
            }
            hasher.update(field.as_bytes());
        }
        Digest::from_hash(*hasher.finalize().as_bytes())
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let data = b"body { color: red }";
        assert_eq!(
            FingerprintHasher::STYLE.hash(data),
            FingerprintHasher::STYLE.hash(data)
        );
    }

    #[test]
    fn different_domains_produce_different_digests() {
        let data = b"same content";
        let style = FingerprintHasher::STYLE.hash(data);
        let text = FingerprintHasher::TEXT.hash(data);
        let media = FingerprintHasher::MEDIA.hash(data);
        assert_ne!(style, text);
        assert_ne!(style, media);
        assert_ne!(text, media);
    }

    #[test]
    fn field_boundaries_are_significant() {
        let a = FingerprintHasher::STYLE.hash_fields(["ab", "c"]);
        let b = FingerprintHasher::STYLE.hash_fields(["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_fields_matches_joined_hash() {
        let joined = FingerprintHasher::STYLE.hash(b"10px~20px~red");
        let fields = FingerprintHasher::STYLE.hash_fields(["10px", "20px", "red"]);
        assert_eq!(joined, fields);
    }

    #[test]
    fn custom_domain() {
        let hasher = FingerprintHasher::new("relens-test-v1");
        assert_ne!(hasher.hash(b"x"), FingerprintHasher::TEXT.hash(b"x"));
        assert_eq!(hasher.domain(), "relens-test-v1");
    }
}
