//! Snapshot data model for relens.
//!
//! A snapshot is an immutable tree capturing a rendered page's structural and
//! visual fingerprint at one point in time. The capture pipeline produces one
//! tree per capture; this crate defines the tree, the capture record wrapping
//! it, and the JSON persistence format the store reads back.
//!
//! # Key Types
//!
//! - [`SnapshotNode`] / [`NodeName`] — One element or content leaf in the tree
//! - [`Capture`] / [`CaptureId`] — A timestamped capture record `{time, url, tree}`
//! - [`SnapshotError`] — Structural validation errors

pub mod capture;
pub mod node;

pub use capture::{Capture, CaptureId};
pub use node::{AttrMap, NodeName, SnapshotError, SnapshotNode};
