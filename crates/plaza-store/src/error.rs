/// Errors from ordered-store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record data is malformed or cannot be decoded.
    #[error("corrupt record: {reason}")]
    CorruptRecord { reason: String },

    /// Serialization failure while sealing a record.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The serialized record exceeds the region's value-size bound.
    #[error("record too large: {size} bytes exceeds limit of {limit}")]
    ValueTooLarge { size: u64, limit: u64 },

    /// A region lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// I/O error from the underlying storage backend.
    ///
    /// Never produced by [`BTreeStore`](crate::BTreeStore); this is the
    /// seam an engine-backed [`OrderedStore`](crate::OrderedStore)
    /// implementation reports through.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
