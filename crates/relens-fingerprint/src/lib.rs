//! Fingerprint policy for relens.
//!
//! The browser-side walk (external to this workspace) extracts raw material
//! per element: computed style properties, attribute values, text runs, media
//! pixels. This crate turns that material into the [`Fingerprint`] values the
//! snapshot model stores, and defines the allow-list policy the walk follows.
//!
//! The policy runs at most once per element per capture. A failure fetching or
//! hashing content never aborts the walk; the affected leaf is recorded as
//! [`Fingerprint::Unknown`] instead.
//!
//! # Key Types
//!
//! - [`FingerprintHasher`] — Domain-separated BLAKE3 hashing
//! - [`StylePolicy`] / [`style_fingerprint`] — Computed-style fingerprints
//! - [`text_fingerprint`] / [`media_fingerprint`] — Content leaf fingerprints
//! - [`WalkPolicy`] — Full walk configuration (allow-lists and selectors)
//!
//! [`Fingerprint`]: relens_types::Fingerprint
//! [`Fingerprint::Unknown`]: relens_types::Fingerprint::Unknown

pub mod content;
pub mod hasher;
pub mod policy;
pub mod style;

pub use content::{collapse_whitespace, media_fingerprint, text_fingerprint};
pub use hasher::FingerprintHasher;
pub use policy::WalkPolicy;
pub use style::{style_fingerprint, StylePolicy};
