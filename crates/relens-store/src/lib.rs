//! Capture persistence for relens.
//!
//! Each capture event is stored as a timestamped record and the most recent
//! capture is tracked as the *baseline* — the left side of the next diff.
//! "No baseline yet" (first capture, proceed silently) and "baseline pointer
//! names a broken record" (alert the operator) are deliberately distinct
//! conditions; see [`CaptureStore::baseline`].
//!
//! # Key Types
//!
//! - [`CaptureStore`] — The storage trait
//! - [`FsCaptureStore`] — Filesystem-backed store (one directory per capture)
//! - [`InMemoryCaptureStore`] — In-memory store for tests and embedding
//! - [`StoreError`] / [`StoreResult`] — Error surface

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsCaptureStore;
pub use memory::InMemoryCaptureStore;
pub use traits::CaptureStore;
