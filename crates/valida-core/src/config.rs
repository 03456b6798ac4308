//! Process-wide validation configuration.
//!
//! Defaults are suitable for form input. Override via environment
//! variables or explicit construction, then install once at startup:
//!
//! ```
//! use valida_core::ValidationConfig;
//!
//! let config = ValidationConfig::from_env().unwrap_or_default();
//! ValidationConfig::install(config);
//! assert!(ValidationConfig::global().max_input_length > 0);
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::ValidaError;

/// Default upper bound on input length accepted by pattern validators.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 256;

/// Environment variable overriding [`ValidationConfig::max_input_length`].
pub const MAX_INPUT_LENGTH_ENV: &str = "VALIDA_MAX_INPUT_LENGTH";

static DEFAULT_CONFIG: ValidationConfig = ValidationConfig {
    max_input_length: DEFAULT_MAX_INPUT_LENGTH,
};

static GLOBAL: OnceCell<ValidationConfig> = OnceCell::new();

/// Tunables shared by every validator in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Inputs longer than this (in characters) are rejected with
    /// `InvalidLength` before any pattern is matched.
    pub max_input_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl ValidationConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `VALIDA_MAX_INPUT_LENGTH` (default: 256, must be a positive integer)
    pub fn from_env() -> Result<Self, ValidaError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_INPUT_LENGTH_ENV) {
            config.max_input_length = parse_positive(MAX_INPUT_LENGTH_ENV, &raw)?;
            tracing::debug!(
                key = MAX_INPUT_LENGTH_ENV,
                value = config.max_input_length,
                "validation config override"
            );
        }
        Ok(config)
    }

    /// Install `config` as the process-wide configuration.
    ///
    /// Returns `false` if a configuration was already installed; the
    /// existing one is kept.
    pub fn install(config: ValidationConfig) -> bool {
        let installed = GLOBAL.set(config).is_ok();
        if !installed {
            tracing::warn!("validation config already installed; ignoring new value");
        }
        installed
    }

    /// The installed configuration, or the default if none was installed.
    pub fn global() -> &'static ValidationConfig {
        GLOBAL.get().unwrap_or(&DEFAULT_CONFIG)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, ValidaError> {
    let value: usize = raw.trim().parse().map_err(|e| ValidaError::Config {
        key: key.to_string(),
        reason: format!("{raw:?} is not a non-negative integer: {e}"),
    })?;
    if value == 0 {
        return Err(ValidaError::Config {
            key: key.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
