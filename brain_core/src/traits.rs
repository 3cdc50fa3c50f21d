//! Core traits for the second-brain system

use async_trait::async_trait;

use crate::types::{Item, ItemId, NewItem};

/// The hosted `items` table, as consumed by the capture endpoint and the
/// board.
///
/// The store is the sole source of truth and the only generator of `id` and
/// `created_at`. Every call touches one row at most (or reads them all); there
/// are no multi-row transactions.
#[async_trait]
pub trait ItemStore: Send + Sync {
    type Error;

    /// Inserts a row and returns what the store wrote, including the
    /// generated `id` and `created_at`.
    async fn insert(&self, item: NewItem) -> Result<Vec<Item>, Self::Error>;

    /// Every row, newest `created_at` first. No limit, no pagination.
    async fn list_recent(&self) -> Result<Vec<Item>, Self::Error>;

    /// Sets `status = archived` on the row with this id.
    ///
    /// Unconditional and idempotent. An id matching no row is not an error.
    async fn archive(&self, id: ItemId) -> Result<(), Self::Error>;
}
