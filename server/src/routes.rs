//! Route definitions.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::panic_response;
use crate::state::AppState;
use crate::{board, capture, handlers};

/// Creates the Axum router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Captures come from browser extensions and shortcuts on any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // JSON endpoints answer panics with {"error": "Erreur serveur"}
    let api = Router::new()
        .route("/capture", post(capture::capture))
        .route("/items", get(handlers::list_items))
        .layer(CatchPanicLayer::custom(panic_response));

    Router::new()
        .route("/", get(board::show_board))
        .route("/items", post(board::create_item))
        .route("/items/{id}/archive", post(board::archive_item))
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
