use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use libcat_store::{CatalogError, StoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The request body could not be read as JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Body of every failed API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Catalog(CatalogError::Validation(_)) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Catalog(CatalogError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Catalog(CatalogError::Storage(_))
            | Self::Config(_)
            | Self::Store(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Server-side failures are logged in full and reported generically.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error.".to_string()
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
