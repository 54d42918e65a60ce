//! Change report consumption for relens.
//!
//! The diff engine emits an ordered `Vec<Change>`; this crate turns that list
//! into what the highlight renderer needs: per-category tallies, a
//! change-kind → visual style mapping, and offset-adjusted overlay rects
//! assigned to the left or right capture surface. The actual image rendering
//! is external; everything here is pure data preparation.
//!
//! # Key Types
//!
//! - [`ChangeSummary`] — Per-category counts
//! - [`HighlightTheme`] / [`HighlightStyle`] — Visual style per change kind
//! - [`plan_overlays`] / [`Overlay`] / [`Surface`] — Placement of highlight
//!   boxes on the two capture surfaces

pub mod overlay;
pub mod summary;
pub mod theme;

pub use overlay::{plan_overlays, Offset, Overlay, Surface};
pub use summary::ChangeSummary;
pub use theme::{HighlightStyle, HighlightTheme};
