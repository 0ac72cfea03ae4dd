use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use libcat_types::{Book, BookField, BookId, BookPatch};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::traits::CatalogStore;

/// CRUD operations over a [`CatalogStore`].
///
/// Each call loads the full collection, scans it linearly, and saves the
/// full collection if it changed anything. Mutating calls hold a write lock
/// for their whole load-modify-save cycle, so concurrent writers sharing one
/// `Catalog` never lose updates. Writers outside this instance (another
/// process on the same file) are not coordinated.
pub struct Catalog {
    store: Arc<dyn CatalogStore>,
    write_lock: Mutex<()>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_store<S: CatalogStore + 'static>(store: S) -> Self {
        Self::new(Arc::new(store))
    }

    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Validate a create request body and append the book it describes.
    pub fn create(&self, input: &Value) -> CatalogResult<Book> {
        let book = Book::from_json(input).inspect_err(|e| {
            debug!(field = e.field().map(BookField::as_str), "rejected create request");
        })?;
        self.insert(book)
    }

    /// Append an already-validated book.
    ///
    /// Fails with [`CatalogError::Conflict`] if its `book_id` is taken.
    pub fn insert(&self, book: Book) -> CatalogResult<Book> {
        let _guard = self.lock_writes();
        let mut books = self.store.load()?;
        if books.iter().any(|b| b.matches(&book.book_id)) {
            return Err(CatalogError::Conflict(book.book_id));
        }
        books.push(book.clone());
        self.store.save(&books)?;
        info!(book_id = %book.book_id, total = books.len(), "book created");
        Ok(book)
    }

    /// Every book, in storage order.
    pub fn list_all(&self) -> CatalogResult<Vec<Book>> {
        let books = self.store.load()?;
        debug!(count = books.len(), "listed books");
        Ok(books)
    }

    pub fn get_by_id(&self, id: &BookId) -> CatalogResult<Book> {
        self.store
            .load()?
            .into_iter()
            .find(|b| b.matches(id))
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// Apply an update request body to the first book matching `id`.
    ///
    /// The lookup happens before the body is validated, so an unknown `id`
    /// reports [`CatalogError::NotFound`] even when the body is invalid.
    pub fn update_by_id(&self, id: &BookId, patch: &Value) -> CatalogResult<Book> {
        let _guard = self.lock_writes();
        let mut books = self.store.load()?;
        let index = position(&books, id)?;
        let patch = BookPatch::from_json(patch)?;
        self.apply_at(&mut books, index, &patch)
    }

    /// Apply an already-parsed patch to the first book matching `id`.
    pub fn patch_by_id(&self, id: &BookId, patch: &BookPatch) -> CatalogResult<Book> {
        let _guard = self.lock_writes();
        let mut books = self.store.load()?;
        let index = position(&books, id)?;
        self.apply_at(&mut books, index, patch)
    }

    /// Remove the first book matching `id` and return it.
    pub fn delete_by_id(&self, id: &BookId) -> CatalogResult<Book> {
        let _guard = self.lock_writes();
        let mut books = self.store.load()?;
        let index = position(&books, id)?;
        let removed = books.remove(index);
        self.store.save(&books)?;
        info!(book_id = %id, total = books.len(), "book deleted");
        Ok(removed)
    }

    fn apply_at(&self, books: &mut [Book], index: usize, patch: &BookPatch) -> CatalogResult<Book> {
        books[index].apply(patch);
        self.store.save(books)?;
        let book = books[index].clone();
        info!(book_id = %book.book_id, "book updated");
        Ok(book)
    }

    // The guard protects no data, so a poisoned lock is still usable.
    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn position(books: &[Book], id: &BookId) -> CatalogResult<usize> {
    books
        .iter()
        .position(|b| b.matches(id))
        .ok_or_else(|| CatalogError::NotFound(id.clone()))
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("store", &self.store.describe())
            .finish()
    }
}
