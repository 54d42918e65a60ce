//! Structural diff engine for relens.
//!
//! Compares two snapshot trees of the same page taken at different times and
//! produces an ordered, classified list of changes: elements added or removed,
//! style deltas, content deltas. This is the algorithmic core of relens; the
//! capture pipeline feeding it and the highlight renderer consuming its output
//! live outside this workspace.
//!
//! The engine is a pure function over two borrowed trees and an explicit
//! config value. It performs no I/O, never mutates its inputs, and is fully
//! deterministic: identical inputs and config produce identical output, so
//! reports can themselves be diffed in tests.
//!
//! # Key Types
//!
//! - [`diff`] — The engine entry point
//! - [`Change`] / [`ChangeKinds`] — One classified change record
//! - [`DiffConfig`] / [`Priority`] — Scan strategy selection

pub mod change;
pub mod engine;
pub mod lcs;

pub use change::{Change, ChangeKinds};
pub use engine::{diff, is_match_candidate, DiffConfig};
pub use lcs::{lcs_head, lcs_tail, Priority};
