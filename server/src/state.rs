//! Application state shared by every handler.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use storage::SharedItemStore;

use crate::telemetry::Telemetry;

/// Checks the shared secret on capture requests.
#[derive(Clone)]
pub struct CaptureAuth {
    expected: String,
}

impl CaptureAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            expected: format!("Bearer {secret}"),
        }
    }

    /// True only when the `authorization` header is exactly
    /// `Bearer <secret>`.
    pub fn accepts(&self, headers: &HeaderMap) -> bool {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == self.expected)
    }
}

impl std::fmt::Debug for CaptureAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureAuth").finish_non_exhaustive()
    }
}

/// Shared application state for Axum handlers.
///
/// The store handle is built once at startup and injected here; handlers
/// never reach for a global client.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedItemStore,
    pub capture_auth: CaptureAuth,
    pub telemetry: Telemetry,
}

impl AppState {
    pub fn new(store: SharedItemStore, capture_secret: &str) -> Self {
        Self {
            store,
            capture_auth: CaptureAuth::new(capture_secret),
            telemetry: Telemetry::default(),
        }
    }

    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }
}
