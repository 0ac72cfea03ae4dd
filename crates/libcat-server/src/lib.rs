//! HTTP server for the library catalog.
//!
//! Exposes the catalog as a JSON CRUD API rooted at `/books`. Every failure
//! is reported as `{"error": <message>}` with a matching status code.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/books` | 201 + created book |
//! | GET | `/books` | 200 + all books |
//! | GET | `/books/:id` | 200 + book |
//! | PUT | `/books/:id` | 200 + updated book |
//! | DELETE | `/books/:id` | 200 + `{"message": ...}` |

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorBody, ServerError, ServerResult};
pub use server::LibcatServer;
pub use state::AppState;
