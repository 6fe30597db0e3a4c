//! # Configuration
//!
//! [`IdentityConfig`] is read from a TOML file. Every field has a default, so a partial file
//! (or no file at all) is valid.
//!
//! ```toml
//! [store]
//! buffer_size = 64
//! first_id = 100
//!
//! [users]
//! max_username_len = 32
//!
//! [logging]
//! level = "debug"
//! ```

use crate::user_actor::UserRules;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file read by [`IdentityConfig::from_env`].
pub const CONFIG_ENV_VAR: &str = "JAMBOX_IDENTITY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Top-level configuration for the identity service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub store: StoreConfig,
    pub users: UserRules,
    pub logging: LoggingConfig,
}

/// Settings for the user store actor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
    /// First id handed out to a registered user.
    pub first_id: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            first_id: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl IdentityConfig {
    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    /// Rejects values the store cannot run with. Any `first_id` is accepted; ids simply run
    /// out sooner the closer it is to `u32::MAX`.
    pub fn validate(&self) -> Result<(), String> {
        if self.store.buffer_size == 0 {
            return Err("store.buffer_size must be at least 1".to_string());
        }
        if self.users.max_username_len == 0 {
            return Err("users.max_username_len must be at least 1".to_string());
        }
        Ok(())
    }

    /// Loads from the file named by [`CONFIG_ENV_VAR`], or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }
}
