use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use relens_snapshot::{Capture, CaptureId, SnapshotNode};

use crate::error::{StoreError, StoreResult};
use crate::traits::CaptureStore;

const LATEST_FILENAME: &str = "latest.log";
const TREE_FILENAME: &str = "tree.json";
const INFO_FILENAME: &str = "info.json";

/// The `{time, url}` header kept beside the tree so listings and baseline
/// lookups never parse whole snapshot trees.
#[derive(Serialize, Deserialize)]
struct CaptureInfo {
    time: CaptureId,
    url: String,
}

/// Filesystem-backed capture store.
///
/// Layout under the root directory:
///
/// ```text
/// <root>/latest.log        baseline pointer (capture millis, one line)
/// <root>/<millis>/tree.json
/// <root>/<millis>/info.json
/// ```
///
/// Screenshots and rendered highlight images produced by the external
/// pipeline live in the same per-capture directories; this store only manages
/// the records it reads back.
pub struct FsCaptureStore {
    root: PathBuf,
}

impl FsCaptureStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The per-capture directory for an ID.
    pub fn capture_dir(&self, id: CaptureId) -> PathBuf {
        self.root.join(id.to_string())
    }

    fn latest_path(&self) -> PathBuf {
        self.root.join(LATEST_FILENAME)
    }

    fn read_optional(path: &Path) -> StoreResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl CaptureStore for FsCaptureStore {
    fn save(&self, capture: &Capture) -> StoreResult<CaptureId> {
        let id = capture.time;
        let dir = self.capture_dir(id);
        fs::create_dir_all(&dir)?;

        let tree = serde_json::to_string(&capture.tree)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let info = serde_json::to_string(&CaptureInfo {
            time: id,
            url: capture.url.clone(),
        })
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(dir.join(TREE_FILENAME), tree)?;
        fs::write(dir.join(INFO_FILENAME), info)?;
        fs::write(self.latest_path(), id.to_string())?;
        debug!(capture = %id, dir = %dir.display(), "saved capture");
        Ok(id)
    }

    fn load(&self, id: CaptureId) -> StoreResult<Option<Capture>> {
        let dir = self.capture_dir(id);
        let Some(tree_json) = Self::read_optional(&dir.join(TREE_FILENAME))? else {
            return Ok(None);
        };
        let Some(info_json) = Self::read_optional(&dir.join(INFO_FILENAME))? else {
            return Ok(None);
        };

        let corrupt = |reason: String| StoreError::CorruptRecord { id, reason };
        let tree: SnapshotNode =
            serde_json::from_str(&tree_json).map_err(|e| corrupt(format!("tree.json: {e}")))?;
        let info: CaptureInfo =
            serde_json::from_str(&info_json).map_err(|e| corrupt(format!("info.json: {e}")))?;
        Ok(Some(Capture::at(info.time, info.url, tree)))
    }

    fn latest(&self) -> StoreResult<Option<CaptureId>> {
        match Self::read_optional(&self.latest_path())? {
            None => Ok(None),
            Some(content) => content
                .parse::<CaptureId>()
                .map(Some)
                .map_err(|_| StoreError::CorruptPointer(content.trim().to_string())),
        }
    }

    fn list(&self) -> StoreResult<Vec<CaptureId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            // Non-numeric directories (e.g. rendered diff output) are not
            // capture records.
            if let Ok(id) = entry.file_name().to_string_lossy().parse::<CaptureId>() {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}

impl std::fmt::Debug for FsCaptureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsCaptureStore")
            .field("root", &self.root)
            .finish()
    }
}
