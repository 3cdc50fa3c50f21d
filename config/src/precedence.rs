//! # Configuration Precedence
//!
//! Merges configuration from multiple sources with precedence rules.
//!
//! # Precedence Order
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)

use crate::config::{BrainConfig, ObservabilityConfig, ServerConfig, StoreConfig};

/// Settings given on the command line.
///
/// Every field is optional; a field that is `Some` always wins, even when
/// it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.port.is_none() && self.logging_level.is_none()
    }
}

/// Merge configuration sources with precedence.
///
/// For the file and env layers, a field wins only when it differs from the
/// built-in default, so a source that leaves a field unset never clobbers a
/// value set lower down. Optional fields win whenever they are `Some`.
/// CLI overrides are applied last and win whenever they are set.
///
/// ```rust,no_run
/// use config::{BrainConfig, load_from_env, load_from_file, merge_configs};
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let from_file = load_from_file(Path::new("brain.toml"))?;
///     let from_env = load_from_env()?;
///     let _config = merge_configs(BrainConfig::default(), Some(from_file), from_env, None);
///     Ok(())
/// }
/// ```
pub fn merge_configs(
    defaults: BrainConfig,
    file_config: Option<BrainConfig>,
    env_config: BrainConfig,
    cli_overrides: Option<ConfigOverrides>,
) -> BrainConfig {
    let mut config = defaults;

    if let Some(file) = file_config {
        config = merge_with_logging(config, file, "file");
    }
    config = merge_with_logging(config, env_config, "env");
    if let Some(cli) = cli_overrides {
        apply_overrides(&mut config, cli);
    }

    config
}

fn apply_overrides(config: &mut BrainConfig, overrides: ConfigOverrides) {
    let mut changes = Vec::new();

    if let Some(host) = overrides.host {
        changes.push(format!("server.host = {host:?}"));
        config.server.host = host;
    }
    if let Some(port) = overrides.port {
        changes.push(format!("server.port = {port}"));
        config.server.port = port;
    }
    if let Some(level) = overrides.logging_level {
        changes.push(format!("observability.logging_level = {level:?}"));
        config.observability.logging_level = level;
    }

    if !changes.is_empty() {
        tracing::debug!(source = "cli", ?changes, "Applied configuration overrides");
    }
}

fn merge_with_logging(mut base: BrainConfig, over: BrainConfig, source_name: &str) -> BrainConfig {
    let mut changes = Vec::new();

    merge_server(&mut base.server, over.server, &mut changes);
    if let Some(secret) = over.capture.api_secret {
        changes.push("capture.api_secret = ***".to_string());
        base.capture.api_secret = Some(secret);
    }
    merge_store(&mut base.store, over.store, &mut changes);
    merge_observability(&mut base.observability, over.observability, &mut changes);

    if !changes.is_empty() {
        tracing::debug!(source = source_name, ?changes, "Applied configuration overrides");
    }

    base
}

fn take<T: PartialEq + std::fmt::Debug>(
    field: &str,
    base: &mut T,
    over: T,
    default: &T,
    changes: &mut Vec<String>,
) {
    if &over != default && over != *base {
        changes.push(format!("{field} = {over:?}"));
        *base = over;
    }
}

fn merge_server(base: &mut ServerConfig, over: ServerConfig, changes: &mut Vec<String>) {
    let d = ServerConfig::default();
    take("server.host", &mut base.host, over.host, &d.host, changes);
    take("server.port", &mut base.port, over.port, &d.port, changes);
}

fn merge_store(base: &mut StoreConfig, over: StoreConfig, changes: &mut Vec<String>) {
    let d = StoreConfig::default();
    take("store.backend", &mut base.backend, over.backend, &d.backend, changes);
    if over.url.is_some() {
        take("store.url", &mut base.url, over.url, &None, changes);
    }
    if let Some(key) = over.api_key {
        changes.push("store.api_key = ***".to_string());
        base.api_key = Some(key);
    }
    take("store.table", &mut base.table, over.table, &d.table, changes);
    take(
        "store.timeout_seconds",
        &mut base.timeout_seconds,
        over.timeout_seconds,
        &d.timeout_seconds,
        changes,
    );
}

fn merge_observability(
    base: &mut ObservabilityConfig,
    over: ObservabilityConfig,
    changes: &mut Vec<String>,
) {
    let d = ObservabilityConfig::default();
    take(
        "observability.logging_level",
        &mut base.logging_level,
        over.logging_level,
        &d.logging_level,
        changes,
    );
    take(
        "observability.json_logs",
        &mut base.json_logs,
        over.json_logs,
        &d.json_logs,
        changes,
    );
    take(
        "observability.metrics_enabled",
        &mut base.metrics_enabled,
        over.metrics_enabled,
        &d.metrics_enabled,
        changes,
    );
}
