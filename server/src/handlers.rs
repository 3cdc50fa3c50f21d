//! JSON handlers outside the capture flow.

use axum::{Json, extract::State};
use brain_core::Item;
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness only. The store is not probed.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// GET /api/items
///
/// Every row, archived included, newest first.
pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>> {
    tracing::debug!("Listing items");

    let items = state.store.list_recent().await.inspect_err(|_| {
        state.telemetry.record_store_error("list");
    })?;

    tracing::debug!(count = items.len(), "Listed items");
    Ok(Json(items))
}
