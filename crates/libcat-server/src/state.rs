use std::sync::Arc;

use libcat_store::{Catalog, CatalogResult};

use crate::error::{ServerError, ServerResult};

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Run a catalog operation on the blocking pool.
    ///
    /// Every operation does synchronous file I/O, so it must not run on an
    /// async worker thread.
    pub async fn run<T, F>(&self, op: F) -> ServerResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Catalog) -> CatalogResult<T> + Send + 'static,
    {
        let catalog = Arc::clone(&self.catalog);
        tokio::task::spawn_blocking(move || op(&catalog))
            .await
            .map_err(|e| ServerError::Internal(format!("catalog task failed: {e}")))?
            .map_err(ServerError::from)
    }
}
