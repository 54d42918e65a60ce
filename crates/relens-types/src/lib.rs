//! Foundation types for relens.
//!
//! This crate provides the geometry and fingerprint primitives used throughout
//! the relens system. Every other relens crate depends on `relens-types`.
//!
//! # Key Types
//!
//! - [`Rect`] — Position and size of a rendered element
//! - [`Digest`] — 32-byte content hash backing a fingerprint
//! - [`Fingerprint`] — Content fingerprint with explicit `Skipped` and
//!   `Unknown` sentinels
//! - [`TypeError`] — Parse/validation errors for the above

pub mod error;
pub mod fingerprint;
pub mod rect;

pub use error::TypeError;
pub use fingerprint::{Digest, Fingerprint};
pub use rect::Rect;
