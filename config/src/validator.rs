//! # Configuration Validation
//!
//! Validation for all configuration structures using the `validator` crate.

use crate::config::BrainConfig;
use validator::Validate;

/// Validate configuration structure.
///
/// ## Validation Rules
/// ### Server
/// - `host`: 1-255 characters
/// - `port`: 1-65535
///
/// ### Capture
/// - `api_secret`: non-empty when set
///
/// ### Store
/// - `url`: a valid URL when set
/// - `api_key`: non-empty when set
/// - `table`: 1-63 characters
/// - `timeout_seconds`: 1-300
///
/// ### Observability
/// - `logging_level`: must be "trace", "debug", "info", "warn", or "error"
///
/// Cross-field requirements (secret present, credentials for the `rest`
/// backend) are checked by [`BrainConfig::check_ready`].
pub fn validate(config: &BrainConfig) -> Result<(), validator::ValidationErrors> {
    config.validate()
}
