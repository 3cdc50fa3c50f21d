//! # Second Brain Errors
//!
//! Error types shared across the second-brain crates.
//!
//! - Uses `thiserror` for structured error definitions
//! - Named fields rather than positional ones

use thiserror::Error;

/// Failures talking to the item store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered but rejected the operation.
    #[error("Store rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Connection to {backend} failed: {reason}")]
    Connection { backend: String, reason: String },

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    #[error("Store {backend} is unavailable")]
    Unavailable { backend: String },
}

impl StoreError {
    /// The message to hand back to callers of the capture endpoint.
    ///
    /// For API rejections this is the store's own wording.
    pub fn store_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Connection { reason, .. } => reason.clone(),
            Self::Serialization { reason } => reason.clone(),
            Self::Unavailable { .. } => self.to_string(),
        }
    }
}
