//! Persistence and CRUD operations for the library catalog.
//!
//! The whole collection lives in one JSON document. Every operation loads
//! the full collection, works on it in memory, and, if it changed anything,
//! writes the full collection back.
//!
//! # Storage Backends
//!
//! All backends implement the [`CatalogStore`] trait:
//!
//! - [`JsonFileStore`] -- pretty-printed JSON array in a single file
//! - [`InMemoryCatalogStore`] -- `Vec`-based store for tests and embedding
//!
//! # Operations
//!
//! [`Catalog`] implements create, list, get, update, and delete on top of
//! any backend.
//!
//! # Design Rules
//!
//! 1. `save` replaces the whole collection; there are no partial writes.
//! 2. File saves go through a temporary file and an atomic rename.
//! 3. Mutations through one `Catalog` are serialized; reads are not.
//! 4. Separate `Catalog` instances over the same file are not coordinated:
//!    the last writer wins.
//! 5. Insertion order is the only ordering.

pub mod catalog;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult, StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryCatalogStore;
pub use traits::CatalogStore;
