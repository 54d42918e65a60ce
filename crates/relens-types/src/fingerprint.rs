use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// 32-byte content hash backing a [`Fingerprint`].
///
/// Identical fingerprinted content always produces the same `Digest`, making
/// equality comparison between two captures a byte compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Create a `Digest` from a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Content fingerprint of a snapshot node's style, text, or media content.
///
/// Beyond the ordinary [`Digest`] case there are two sentinels that must stay
/// distinguishable:
///
/// - [`Fingerprint::Skipped`] — the fingerprint was intentionally not
///   computed (style ignored by a selector policy, element not rendered).
/// - [`Fingerprint::Unknown`] — the capture pipeline failed to fetch or hash
///   the content (e.g. an unreachable image). The walk carries on; the failure
///   is recorded here instead of aborting the capture.
///
/// Structural equality (`==`) treats two `Unknown` values as equal, which is
/// what serialization round-trip checks want. Diffing must not: use
/// [`Fingerprint::matches`], where `Unknown` never matches anything — a masked
/// fetch failure must surface as a change rather than silently hide one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    /// Intentionally not computed.
    #[default]
    Skipped,
    /// Content could not be fetched or hashed.
    Unknown,
    /// Digest of the fingerprinted content.
    Digest(Digest),
}

impl Fingerprint {
    /// Wrap a pre-computed hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self::Digest(Digest::from_hash(hash))
    }

    /// Returns `true` for the `Skipped` sentinel.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Returns `true` for the `Unknown` sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Comparison used by the diff engine.
    ///
    /// `Unknown` matches nothing, not even another `Unknown`. Two `Skipped`
    /// values match (both sides intentionally carry no fingerprint). Digests
    /// match by equality.
    pub fn matches(&self, other: &Fingerprint) -> bool {
        match (self, other) {
            (Self::Unknown, _) | (_, Self::Unknown) => false,
            (Self::Skipped, Self::Skipped) => true,
            (Self::Digest(a), Self::Digest(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => Ok(()),
            Self::Unknown => write!(f, "?"),
            Self::Digest(d) => write!(f, "{d}"),
        }
    }
}

impl FromStr for Fingerprint {
    type Err = TypeError;

    /// Parse the persisted string form: `""` for skipped, `"?"` for unknown,
    /// 64 hex characters for a digest.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Skipped),
            "?" => Ok(Self::Unknown),
            hex => Digest::from_hex(hex)
                .map(Self::Digest)
                .map_err(|_| TypeError::InvalidFingerprint(s.to_string())),
        }
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
