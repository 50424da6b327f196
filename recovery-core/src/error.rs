use thiserror::Error;

/// Failures of a [`KeyValueStore`](crate::KeyValueStore) or of the data kept in it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend refused the operation.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored value is not a JSON array of the expected records.
    #[error("corrupt data under key `{key}`: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize records for `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
