use relens_snapshot::{Capture, CaptureId};

use crate::error::{StoreError, StoreResult};

/// Persistent storage for capture records.
///
/// All implementations must satisfy these invariants:
/// - Capture records are immutable once written; `save` of an existing ID
///   overwrites with identical content or fails, never half-writes.
/// - `save` advances the baseline pointer to the saved capture.
/// - Concurrent reads are safe.
/// - All I/O errors are propagated, never silently ignored.
pub trait CaptureStore: Send + Sync {
    /// Persist a capture and advance the baseline pointer to it.
    fn save(&self, capture: &Capture) -> StoreResult<CaptureId>;

    /// Load a capture record by ID.
    ///
    /// Returns `Ok(None)` if no record exists for that ID.
    /// Returns `Err` on I/O failure or an undecodable record.
    fn load(&self, id: CaptureId) -> StoreResult<Option<Capture>>;

    /// The ID the baseline pointer currently names, if any.
    fn latest(&self) -> StoreResult<Option<CaptureId>>;

    /// All capture IDs in the store, ascending.
    fn list(&self) -> StoreResult<Vec<CaptureId>>;

    /// Load the baseline capture.
    ///
    /// Returns `Ok(None)` when no baseline exists yet — the first capture has
    /// nothing to diff against, and callers proceed silently. A baseline
    /// pointer that names a missing record is an error
    /// ([`StoreError::DanglingBaseline`]), as is an unreadable record:
    /// callers alert rather than quietly re-baselining.
    fn baseline(&self) -> StoreResult<Option<Capture>> {
        match self.latest()? {
            None => Ok(None),
            Some(id) => match self.load(id)? {
                Some(capture) => Ok(Some(capture)),
                None => Err(StoreError::DanglingBaseline(id)),
            },
        }
    }
}
