use std::sync::RwLock;

use libcat_types::Book;

use crate::error::StoreResult;
use crate::traits::CatalogStore;

/// In-memory, `Vec`-based catalog store.
///
/// Intended for tests and embedding. The collection is held behind a
/// `RwLock` and cloned on every load and save, matching the copy-in/copy-out
/// semantics of the file backend.
pub struct InMemoryCatalogStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryCatalogStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store seeded with an existing collection.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Number of books currently stored.
    pub fn len(&self) -> usize {
        self.books.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.books.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        Ok(self.books.read().expect("lock poisoned").clone())
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        *self.books.write().expect("lock poisoned") = books.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl std::fmt::Debug for InMemoryCatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCatalogStore")
            .field("book_count", &self.len())
            .finish()
    }
}
