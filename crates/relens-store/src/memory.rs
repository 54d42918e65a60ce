use std::collections::BTreeMap;
use std::sync::RwLock;

use relens_snapshot::{Capture, CaptureId};

use crate::error::StoreResult;
use crate::traits::CaptureStore;

#[derive(Default)]
struct Inner {
    records: BTreeMap<CaptureId, Capture>,
    latest: Option<CaptureId>,
}

/// In-memory capture store.
///
/// Intended for tests and embedding. Records are held behind a `RwLock` and
/// cloned on read. The baseline pointer is tracked explicitly rather than
/// derived from the highest ID, matching the filesystem backend's behavior.
pub struct InMemoryCaptureStore {
    inner: RwLock<Inner>,
}

impl InMemoryCaptureStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of capture records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").records.is_empty()
    }

    /// Drop a record without touching the baseline pointer.
    ///
    /// Test hook for producing a dangling baseline.
    pub fn forget(&self, id: CaptureId) -> bool {
        self.inner
            .write()
            .expect("lock poisoned")
            .records
            .remove(&id)
            .is_some()
    }
}

impl Default for InMemoryCaptureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureStore for InMemoryCaptureStore {
    fn save(&self, capture: &Capture) -> StoreResult<CaptureId> {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.records.insert(capture.time, capture.clone());
        inner.latest = Some(capture.time);
        Ok(capture.time)
    }

    fn load(&self, id: CaptureId) -> StoreResult<Option<Capture>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.records.get(&id).cloned())
    }

    fn latest(&self) -> StoreResult<Option<CaptureId>> {
        Ok(self.inner.read().expect("lock poisoned").latest)
    }

    fn list(&self) -> StoreResult<Vec<CaptureId>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.records.keys().copied().collect())
    }
}

impl std::fmt::Debug for InMemoryCaptureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCaptureStore")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use relens_snapshot::SnapshotNode;

    fn capture(millis: i64) -> Capture {
        Capture::at(
            CaptureId::from_millis(millis),
            "https://example.com/",
            SnapshotNode::element("body"),
        )
    }

    #[test]
    fn save_and_load_roundtrip() {
        let store = InMemoryCaptureStore::new();
        let c = capture(1000);
        let id = store.save(&c).unwrap();
        assert_eq!(store.load(id).unwrap(), Some(c));
    }

    #[test]
    fn load_missing_returns_none() {
        let store = InMemoryCaptureStore::new();
        assert!(store.load(CaptureId::from_millis(1)).unwrap().is_none());
    }

    #[test]
    fn save_advances_baseline() {
        let store = InMemoryCaptureStore::new();
        assert_eq!(store.latest().unwrap(), None);
        store.save(&capture(1000)).unwrap();
        store.save(&capture(2000)).unwrap();
        assert_eq!(store.latest().unwrap(), Some(CaptureId::from_millis(2000)));
    }

    #[test]
    fn baseline_none_on_empty_store() {
        let store = InMemoryCaptureStore::new();
        assert!(store.baseline().unwrap().is_none());
    }

    #[test]
    fn baseline_returns_latest_capture() {
        let store = InMemoryCaptureStore::new();
        store.save(&capture(1000)).unwrap();
        let c = capture(2000);
        store.save(&c).unwrap();
        assert_eq!(store.baseline().unwrap(), Some(c));
    }

    #[test]
    fn dangling_baseline_is_an_error_not_none() {
        let store = InMemoryCaptureStore::new();
        let id = store.save(&capture(1000)).unwrap();
        assert!(store.forget(id));
        assert!(matches!(
            store.baseline(),
            Err(StoreError::DanglingBaseline(got)) if got == id
        ));
    }

    #[test]
    fn list_is_ascending() {
        let store = InMemoryCaptureStore::new();
        store.save(&capture(3000)).unwrap();
        store.save(&capture(1000)).unwrap();
        store.save(&capture(2000)).unwrap();
        let ids: Vec<i64> = store.list().unwrap().iter().map(|id| id.as_millis()).collect();
        assert_eq!(ids, vec![1000, 2000, 3000]);
    }
}
