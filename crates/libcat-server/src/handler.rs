use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use libcat_types::{Book, BookId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Book deleted successfully.";

/// Body returned by a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Unwrap a JSON body, turning extractor rejections into `{error}` responses.
///
/// A request without a JSON content type carries no fields at all, so it
/// reads as an empty object and falls through to the normal lookup and
/// validation. Malformed JSON is still rejected.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> ServerResult<Value> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Map::new())),
        Err(rejection) => Err(ServerError::InvalidBody(rejection.body_text())),
    }
}

/// `POST /books`
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Book>)> {
    let input = json_body(body)?;
    let book = state.run(move |catalog| catalog.create(&input)).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// `GET /books`
pub async fn list_books(State(state): State<AppState>) -> ServerResult<Json<Vec<Book>>> {
    let books = state.run(|catalog| catalog.list_all()).await?;
    Ok(Json(books))
}

/// `GET /books/:id`
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Book>> {
    let id = BookId::from(id);
    let book = state.run(move |catalog| catalog.get_by_id(&id)).await?;
    Ok(Json(book))
}

/// `PUT /books/:id`
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ServerResult<Json<Book>> {
    let id = BookId::from(id);
    let patch = json_body(body)?;
    let book = state
        .run(move |catalog| catalog.update_by_id(&id, &patch))
        .await?;
    Ok(Json(book))
}

/// `DELETE /books/:id`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<DeleteResponse>> {
    let id = BookId::from(id);
    state.run(move |catalog| catalog.delete_by_id(&id)).await?;
    Ok(Json(DeleteResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "libcat-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
