//! The board: list, create and archive items from the browser.
//!
//! Every mutation ends in a redirect back to `/`, which re-fetches the whole
//! table. Nothing is updated optimistically and nothing is cached between
//! requests.

use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use brain_core::{Board, Item, ItemId, NewItem, QuickKind};
use serde::Deserialize;
use storage::SharedItemStore;

use crate::page::{self, BoardPage, SAVE_FAILED_ALERT};
use crate::state::AppState;

/// Form posted by the board's input field.
#[derive(Debug, Deserialize)]
pub struct CreateItemForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub kind: QuickKind,
}

/// Fetches every item for display.
///
/// A failed fetch is logged and shown as an empty board.
async fn load_items(state: &AppState) -> Vec<Item> {
    match state.store.list_recent().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load items");
            state.telemetry.record_store_error("list");
            Vec::new()
        }
    }
}

/// GET /
pub async fn show_board(State(state): State<Arc<AppState>>) -> Html<String> {
    let items = load_items(&state).await;
    let board = Board::partition(&items);

    tracing::debug!(
        total = items.len(),
        actions = board.actions.len(),
        reflections = board.reflections.len(),
        "Rendering board",
    );

    Html(page::render(&BoardPage::new(&board)))
}

/// POST /items
///
/// Blank input is ignored. On failure the board is shown again with a
/// blocking alert and the typed text still in the field.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateItemForm>,
) -> Response {
    if form.title.trim().is_empty() {
        return Redirect::to("/").into_response();
    }

    match state
        .store
        .insert(NewItem::quick(form.title.clone(), form.kind))
        .await
    {
        Ok(_) => {
            state.telemetry.record_item_created(&form.kind.to_string());
            tracing::info!(kind = %form.kind, "Created item");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, kind = %form.kind, "Failed to create item");
            state.telemetry.record_store_error("insert");

            let items = load_items(&state).await;
            let board = Board::partition(&items);
            let html = page::render(&BoardPage {
                board: &board,
                alert: Some(SAVE_FAILED_ALERT),
                draft: &form.title,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
        }
    }
}

/// POST /items/{id}/archive
///
/// A failed archive is logged and retried once. The board is re-fetched
/// whatever the outcome.
pub async fn archive_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ItemId>,
) -> Redirect {
    if archive_with_retry(&state.store, id).await {
        state.telemetry.record_archived();
    } else {
        state.telemetry.record_store_error("archive");
    }
    Redirect::to("/")
}

async fn archive_with_retry(store: &SharedItemStore, id: ItemId) -> bool {
    let Err(first) = store.archive(id).await else {
        tracing::info!(item_id = %id, "Archived item");
        return true;
    };
    tracing::warn!(item_id = %id, error = %first, "Archive failed, retrying once");

    match store.archive(id).await {
        Ok(()) => {
            tracing::info!(item_id = %id, "Archived item on retry");
            true
        }
        Err(e) => {
            tracing::error!(item_id = %id, error = %e, "Archive failed after retry");
            false
        }
    }
}
