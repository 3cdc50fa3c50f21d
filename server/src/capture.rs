//! `POST /api/capture`: inbound captures from external clients.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use brain_core::{CaptureRequest, NewItem};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Confirmation message sent back on a successful capture.
pub const CAPTURE_SAVED_MESSAGE: &str = "Sauvegardé !";

/// Success body: `{"success": true, "message": "Sauvegardé !"}`.
#[derive(Debug, Serialize)]
pub struct CaptureResponse {
    pub success: bool,
    pub message: String,
}

/// Stores one captured text/URL as an inbox item.
///
/// The shared secret is checked before the body is even parsed, so a
/// rejected caller never reaches the store. The body is read raw and decoded
/// afterwards; a malformed body is an internal error, not a 4xx.
pub async fn capture(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CaptureResponse>> {
    if !state.capture_auth.accepts(&headers) {
        tracing::warn!("Rejected capture with missing or incorrect secret");
        state.telemetry.record_capture("unauthorized");
        return Err(ApiError::Unauthorized);
    }

    let request: CaptureRequest = serde_json::from_slice(&body).map_err(|e| {
        state.telemetry.record_capture("invalid");
        ApiError::Internal(format!("invalid capture body: {e}"))
    })?;

    let item = NewItem::from_capture(&request);
    let rows = state.store.insert(item).await.map_err(|e| {
        state.telemetry.record_capture("store_error");
        state.telemetry.record_store_error("insert");
        ApiError::Store(e)
    })?;

    state.telemetry.record_capture("accepted");
    tracing::info!(
        item_id = ?rows.first().map(|row| row.id),
        has_url = request.url.as_deref().is_some_and(|u| !u.is_empty()),
        "Captured item"
    );

    Ok(Json(CaptureResponse {
        success: true,
        message: CAPTURE_SAVED_MESSAGE.to_string(),
    }))
}
