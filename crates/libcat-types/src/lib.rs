//! Foundation types for the library catalog.
//!
//! This crate provides the record and identifier types shared by the store,
//! the HTTP server, and the command-line tool. Request bodies arrive as raw
//! JSON, so the validation rules for creating and patching a book live here
//! next to the types they produce.
//!
//! # Key Types
//!
//! - [`Book`] -- A single catalog entry, exactly as persisted
//! - [`BookId`] -- Caller-supplied identifier, always held as a string
//! - [`BookPatch`] -- Field-level overwrite set for updates
//! - [`BookField`] -- Names of the persisted fields, used in error reporting
//! - [`ValidationError`] -- Malformed, missing, or wrong-typed input

pub mod book;
pub mod error;
pub mod id;
mod json;
pub mod patch;

pub use book::{Book, BookField};
pub use error::ValidationError;
pub use id::BookId;
pub use patch::BookPatch;
