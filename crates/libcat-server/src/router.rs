use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all catalog endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(handler::list_books).post(handler::create_book))
        .route(
            "/books/:id",
            get(handler::get_book)
                .put(handler::update_book)
                .delete(handler::delete_book),
        )
        .route("/health", get(handler::health_handler))
        .route("/info", get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
