use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use libcat_types::Book;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::traits::CatalogStore;

/// Catalog stored as a pretty-printed JSON array in a single file.
///
/// Saves write the full document to a temporary file in the same directory
/// and atomically rename it over the target, so readers and crashes never
/// observe a truncated file. No advisory locking is taken: two stores on
/// the same path race, and the last save wins.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store over `path`. The file is not touched until the first
    /// `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a store over `path`, writing an empty collection first if the
    /// file does not exist. Missing parent directories are created.
    pub fn init(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self::new(path);
        if !store.path.exists() {
            if let Some(parent) = store.parent_dir() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
            store.save(&[])?;
            info!(path = %store.path.display(), "initialized empty catalog");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::Missing(self.path.clone()),
            _ => StoreError::io(&self.path, e),
        })?;
        let books: Vec<Book> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(books)?;
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;

        // Keep the mode of the file being replaced rather than the
        // owner-only mode of the temporary file.
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| StoreError::io(tmp.path(), e))?;
        }

        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
