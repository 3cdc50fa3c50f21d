//! # Configuration System
//!
//! Configuration for the second-brain server.
//!
//! This crate provides:
//! - Configuration structures with defaults
//! - Environment variable loading (12-factor app principles)
//! - Configuration file loading (TOML/YAML)
//! - Configuration precedence (CLI > env > file > defaults)
//! - Configuration validation
//!
//! Configuration is read once at startup; there is no hot reload.

pub mod config;
pub mod file_loader;
pub mod loader;
pub mod precedence;
pub mod validator;

pub use config::{
    BrainConfig, CaptureConfig, ConfigError, ObservabilityConfig, ServerConfig, StoreBackend,
    StoreConfig,
};
pub use file_loader::{ConfigFileError, load_from_file, load_from_toml, load_from_yaml};
pub use loader::load_from_env;
pub use precedence::{ConfigOverrides, merge_configs};
pub use validator::validate;
