//! Logging setup and request counters.

use config::ObservabilityConfig;
use metrics::counter;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}

/// Counters for the capture endpoint and the board.
///
/// Recorded through the `metrics` facade; whichever recorder the host
/// process installs receives them.
#[derive(Debug, Clone, Copy)]
pub struct Telemetry {
    enabled: bool,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Telemetry {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn record_capture(&self, outcome: &'static str) {
        if self.enabled {
            counter!("brain_capture_requests_total", "outcome" => outcome).increment(1);
        }
    }

    pub fn record_item_created(&self, kind: &str) {
        if self.enabled {
            counter!("brain_items_created_total", "kind" => kind.to_string()).increment(1);
        }
    }

    pub fn record_archived(&self) {
        if self.enabled {
            counter!("brain_items_archived_total").increment(1);
        }
    }

    pub fn record_store_error(&self, operation: &'static str) {
        if self.enabled {
            counter!("brain_store_errors_total", "operation" => operation).increment(1);
        }
    }
}
