use relens_snapshot::CaptureId;

/// Errors from capture store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A capture record exists but cannot be decoded.
    #[error("corrupt capture record {id}: {reason}")]
    CorruptRecord { id: CaptureId, reason: String },

    /// The baseline pointer exists but does not name a capture time.
    #[error("corrupt baseline pointer: {0:?}")]
    CorruptPointer(String),

    /// The baseline pointer names a capture that has no record.
    ///
    /// Distinct from "no baseline": the pointer promised a record and the
    /// record is gone, which callers surface loudly instead of treating as a
    /// clean first capture.
    #[error("baseline pointer names capture {0}, but no record exists")]
    DanglingBaseline(CaptureId),

    /// Serialization or deserialization failure while writing.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
