use libcat_types::Book;

use crate::error::StoreResult;

/// Whole-collection catalog storage.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the complete collection in insertion order.
/// - `save` replaces the complete collection; after it returns `Ok`, a
///   subsequent `load` returns exactly the saved records.
/// - A failed `save` leaves the previously saved collection in place.
/// - All I/O errors are propagated, never silently ignored.
pub trait CatalogStore: Send + Sync {
    /// Read the full collection.
    fn load(&self) -> StoreResult<Vec<Book>>;

    /// Replace the full collection.
    fn save(&self, books: &[Book]) -> StoreResult<()>;

    /// Human-readable location of the collection, for logs.
    fn describe(&self) -> String {
        "catalog".to_string()
    }
}
