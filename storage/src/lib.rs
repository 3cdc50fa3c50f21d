//! # Storage Layer
//!
//! Backends for the `items` table:
//! - [`RestItemStore`]: the hosted table, reached over its PostgREST API
//! - [`MemoryItemStore`]: an in-process table for local runs and tests

pub mod memory;
pub mod rest;

use std::sync::Arc;

use brain_core::ItemStore;
use config::{StoreBackend, StoreConfig};
use errors::StoreError;

pub use memory::MemoryItemStore;
pub use rest::RestItemStore;

/// Store handle shared by every request handler.
pub type SharedItemStore = Arc<dyn ItemStore<Error = StoreError>>;

/// Builds the store selected by configuration.
///
/// Called once at startup; the handle is then injected into the server state.
pub fn build_store(config: &StoreConfig) -> Result<SharedItemStore, StoreError> {
    match config.backend {
        StoreBackend::Rest => {
            let store = RestItemStore::new(config)?;
            tracing::info!(endpoint = %store.endpoint(), "Using hosted REST item store");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory item store, items are lost on restart");
            Ok(Arc::new(MemoryItemStore::new()))
        }
    }
}
