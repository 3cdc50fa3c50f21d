//! # Configuration Structures
//!
//! All configuration structures for the second-brain server.
//!
//! All configuration structures:
//! - Use `serde` for serialization/deserialization
//! - Use `validator` for input validation
//! - Carry defaults so a partial file or environment is enough

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;
use validator::Validate;

/// Top-level configuration, loaded once at process start.
///
/// ## Fields
/// - `server`: bind address of the HTTP server
/// - `capture`: shared secret guarding `POST /api/capture`
/// - `store`: which item store to use and how to reach it
/// - `observability`: logging and metrics switches
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
pub struct BrainConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    #[serde(default)]
    #[validate(nested)]
    pub capture: CaptureConfig,

    #[serde(default)]
    #[validate(nested)]
    pub store: StoreConfig,

    #[serde(default)]
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

/// Errors raised when a configuration cannot be used to start the server.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting: {field}")]
    Missing { field: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl BrainConfig {
    /// Runs field validation plus the cross-field rules the server needs
    /// before it can accept traffic.
    ///
    /// - the capture secret is set and not blank
    /// - the `rest` backend has both a URL and an API key
    pub fn check_ready(&self) -> Result<(), ConfigError> {
        self.validate()?;

        if self
            .capture
            .api_secret
            .as_deref()
            .is_none_or(|s| s.trim().is_empty())
        {
            return Err(ConfigError::Missing {
                field: "capture.api_secret".to_string(),
            });
        }

        if self.store.backend == StoreBackend::Rest {
            if self.store.url.is_none() {
                return Err(ConfigError::Missing {
                    field: "store.url".to_string(),
                });
            }
            if self.store.api_key.is_none() {
                return Err(ConfigError::Missing {
                    field: "store.api_key".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    #[validate(length(min = 1, max = 255))]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Capture endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
pub struct CaptureConfig {
    /// Shared secret. Callers send `authorization: Bearer <api_secret>`.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub api_secret: Option<String>,
}

/// Which store implementation backs the `items` table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Hosted table reached over its REST (PostgREST) API.
    #[default]
    Rest,
    /// In-process table, lost on restart. For local runs and tests.
    Memory,
}

/// Item store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Project URL of the hosted store, e.g. `https://xyz.supabase.co`
    #[serde(default)]
    #[validate(url)]
    pub url: Option<String>,

    /// API key sent as both `apikey` and bearer token
    #[serde(default)]
    #[validate(length(min = 1))]
    pub api_key: Option<String>,

    /// Table name (default: "items")
    #[serde(default = "default_table")]
    #[validate(length(min = 1, max = 63))]
    pub table: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_seconds")]
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
}

fn default_table() -> String {
    "items".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: None,
            api_key: None,
            table: default_table(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Logging and metrics switches.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ObservabilityConfig {
    /// trace/debug/info/warn/error (default: "info")
    #[serde(default = "default_logging_level")]
    #[validate(custom(function = "validate_logging_level"))]
    pub logging_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Record request counters through the `metrics` facade
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_logging_level() -> String {
    "info".to_string()
}

fn default_metrics_enabled() -> bool {
    true
}

fn validate_logging_level(value: &str) -> Result<(), validator::ValidationError> {
    match value {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(validator::ValidationError::new("Invalid logging level")),
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            logging_level: default_logging_level(),
            json_logs: false,
            metrics_enabled: default_metrics_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_config() -> BrainConfig {
        let mut config = BrainConfig::default();
        config.capture.api_secret = Some("s3cret".to_string());
        config.store.url = Some("https://example.supabase.co".to_string());
        config.store.api_key = Some("anon-key".to_string());
        config
    }

    #[test]
    fn test_defaults() {
        let config = BrainConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store.backend, StoreBackend::Rest);
        assert_eq!(config.store.table, "items");
        assert_eq!(config.store.timeout_seconds, 30);
        assert_eq!(config.observability.logging_level, "info");
        assert!(config.observability.metrics_enabled);
        assert!(config.capture.api_secret.is_none());
    }

    #[test]
    fn test_bind_address() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(server.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_ready_config_passes() {
        assert!(ready_config().check_ready().is_ok());
    }

    #[test]
    fn test_missing_secret_rejected() {
        let mut config = ready_config();
        config.capture.api_secret = None;
        assert!(matches!(
            config.check_ready(),
            Err(ConfigError::Missing { field }) if field == "capture.api_secret"
        ));

        config.capture.api_secret = Some("   ".to_string());
        assert!(config.check_ready().is_err());
    }

    #[test]
    fn test_rest_backend_needs_url_and_key() {
        let mut config = ready_config();
        config.store.url = None;
        assert!(matches!(
            config.check_ready(),
            Err(ConfigError::Missing { field }) if field == "store.url"
        ));

        let mut config = ready_config();
        config.store.api_key = None;
        assert!(matches!(
            config.check_ready(),
            Err(ConfigError::Missing { field }) if field == "store.api_key"
        ));
    }

    #[test]
    fn test_memory_backend_needs_no_credentials() {
        let mut config = BrainConfig::default();
        config.capture.api_secret = Some("s3cret".to_string());
        config.store.backend = StoreBackend::Memory;
        assert!(config.check_ready().is_ok());
    }

    #[test]
    fn test_invalid_nested_fields_rejected() {
        let mut config = ready_config();
        config.observability.logging_level = "verbose".to_string();
        assert!(matches!(config.check_ready(), Err(ConfigError::Invalid(_))));

        let mut config = ready_config();
        config.store.url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        let mut config = ready_config();
        config.store.table = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("REST".parse::<StoreBackend>().unwrap(), StoreBackend::Rest);
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }
}
