use thiserror::Error;

use crate::cms::Collection;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("{collection} query failed: {source}")]
    Http {
        collection: Collection,
        #[source]
        source: reqwest::Error,
    },

    #[error("{collection} query returned HTTP {status}: {body}")]
    Status {
        collection: Collection,
        status: u16,
        body: String,
    },

    #[error("{collection} response could not be decoded: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not replace snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl SyncError {
    /// The collection whose query failed, if this is a query error.
    pub fn collection(&self) -> Option<Collection> {
        match self {
            SyncError::Http { collection, .. }
            | SyncError::Status { collection, .. }
            | SyncError::Decode { collection, .. } => Some(*collection),
            _ => None,
        }
    }
}
