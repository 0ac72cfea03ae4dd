use std::path::PathBuf;

use libcat_types::{BookId, ValidationError};

/// Errors from catalog store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The catalog file does not exist.
    #[error("catalog file not found: {}", .0.display())]
    Missing(PathBuf),

    /// I/O error reading or writing the catalog file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file exists but is not a valid collection.
    #[error("corrupt catalog file {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from catalog operations.
///
/// The `Display` text of the client-side variants is the message returned
/// in API error bodies.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Book with this ID already exists.")]
    Conflict(BookId),

    #[error("Book not found.")]
    NotFound(BookId),

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
