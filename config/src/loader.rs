//! # Environment Variable Loader
//!
//! Loads configuration from environment variables following 12-factor app
//! principles.
//!
//! # Naming Convention
//! - `BRAIN_*`: server, store and observability settings
//! - `API_SECRET_KEY`: capture endpoint shared secret
//! - `SUPABASE_*`: hosted store credentials

use crate::config::{BrainConfig, CaptureConfig, ObservabilityConfig, ServerConfig, StoreConfig};
use std::env;

/// Load configuration from environment variables.
///
/// Unset or unparseable variables fall back to defaults.
///
/// ## Environment Variables
/// ### Server
/// - `BRAIN_HOST`: bind host (default: "0.0.0.0")
/// - `BRAIN_PORT`: bind port (default: 3000)
///
/// ### Capture
/// - `API_SECRET_KEY`: shared secret expected after `Bearer `
///
/// ### Store
/// - `BRAIN_STORE_BACKEND`: rest/memory (default: rest)
/// - `SUPABASE_URL`: project URL of the hosted store
/// - `SUPABASE_KEY`: API key for the hosted store
/// - `BRAIN_STORE_TABLE`: table name (default: "items")
/// - `BRAIN_STORE_TIMEOUT_SECONDS`: request timeout (default: 30)
///
/// ### Observability
/// - `BRAIN_LOG_LEVEL`: trace/debug/info/warn/error (default: "info")
/// - `BRAIN_JSON_LOGS`: true/false (default: false)
/// - `BRAIN_METRICS_ENABLED`: true/false (default: true)
pub fn load_from_env() -> Result<BrainConfig, Box<dyn std::error::Error>> {
    Ok(BrainConfig {
        server: load_server_from_env(),
        capture: load_capture_from_env(),
        store: load_store_from_env(),
        observability: load_observability_from_env(),
    })
}

fn load_server_from_env() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        host: env::var("BRAIN_HOST").unwrap_or(defaults.host),
        port: parse_env("BRAIN_PORT").unwrap_or(defaults.port),
    }
}

fn load_capture_from_env() -> CaptureConfig {
    CaptureConfig {
        api_secret: env::var("API_SECRET_KEY").ok(),
    }
}

fn load_store_from_env() -> StoreConfig {
    let defaults = StoreConfig::default();
    StoreConfig {
        backend: parse_env("BRAIN_STORE_BACKEND").unwrap_or(defaults.backend),
        url: env::var("SUPABASE_URL").ok(),
        api_key: env::var("SUPABASE_KEY").ok(),
        table: env::var("BRAIN_STORE_TABLE").unwrap_or(defaults.table),
        timeout_seconds: parse_env("BRAIN_STORE_TIMEOUT_SECONDS")
            .unwrap_or(defaults.timeout_seconds),
    }
}

fn load_observability_from_env() -> ObservabilityConfig {
    let defaults = ObservabilityConfig::default();
    ObservabilityConfig {
        logging_level: env::var("BRAIN_LOG_LEVEL").unwrap_or(defaults.logging_level),
        json_logs: parse_env("BRAIN_JSON_LOGS").unwrap_or(defaults.json_logs),
        metrics_enabled: parse_env("BRAIN_METRICS_ENABLED").unwrap_or(defaults.metrics_enabled),
    }
}

fn parse_env<T>(key: &str) -> Result<T, Box<dyn std::error::Error>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(s) => s
            .parse::<T>()
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error>),
        Err(e) => Err(Box::new(e) as Box<dyn std::error::Error>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BRAIN_HOST",
        "BRAIN_PORT",
        "API_SECRET_KEY",
        "BRAIN_STORE_BACKEND",
        "SUPABASE_URL",
        "SUPABASE_KEY",
        "BRAIN_STORE_TABLE",
        "BRAIN_STORE_TIMEOUT_SECONDS",
        "BRAIN_LOG_LEVEL",
        "BRAIN_JSON_LOGS",
        "BRAIN_METRICS_ENABLED",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_defaults() {
        clear_env();
        let config = load_from_env().unwrap();
        assert_eq!(config, BrainConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_from_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("BRAIN_PORT", "8088");
            env::set_var("API_SECRET_KEY", "hunter2");
            env::set_var("BRAIN_STORE_BACKEND", "memory");
            env::set_var("SUPABASE_URL", "https://abc.supabase.co");
            env::set_var("BRAIN_JSON_LOGS", "true");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.capture.api_secret.as_deref(), Some("hunter2"));
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.url.as_deref(), Some("https://abc.supabase.co"));
        assert!(config.observability.json_logs);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_values_fall_back() {
        clear_env();
        unsafe {
            env::set_var("BRAIN_PORT", "not-a-port");
            env::set_var("BRAIN_STORE_BACKEND", "sqlite");
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store.backend, StoreBackend::Rest);

        clear_env();
    }

    #[test]
    fn test_parse_env_missing() {
        let result: Result<u32, _> = parse_env("BRAIN_NONEXISTENT_VAR");
        assert!(result.is_err());
    }
}
