/// Unified error type for all storage operations
///
/// Storage failures are always surfaced to the caller; nothing is retried
/// or swallowed at this layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem error (missing directory, permissions, disk full)
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection file could not be encoded or decoded
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
