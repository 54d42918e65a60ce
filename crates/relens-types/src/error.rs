//! Error types for the foundation crate.

/// Errors from parsing or validating foundation types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A decoded value had the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A fingerprint string was neither a sentinel nor a valid digest.
    #[error("invalid fingerprint: {0:?}")]
    InvalidFingerprint(String),
}
