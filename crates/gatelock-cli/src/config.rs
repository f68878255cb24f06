//! Host configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gatelock_core::{DEFAULT_EXIT_KEYWORD, DEFAULT_MAX_ATTEMPTS};

/// Errors from loading or validating host configuration
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for one interactive session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Reference credential for the guarded account
    pub credential: String,

    /// Failed attempts allowed before lockout
    pub max_attempts: u32,

    /// Input value that ends the session
    pub exit_keyword: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            credential: "supersecret".to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_string(),
        }
    }
}

impl HostConfig {
    /// Platform-appropriate default config path
    pub fn default_path() -> PathBuf {
        std::env::var_os("GATELOCK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                config_dir()
                    .unwrap_or_else(|| PathBuf::from("/etc"))
                    .join("gatelock")
                    .join("config.json")
            })
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, HostError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), HostError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check configuration consistency
    pub fn validate(&self) -> Result<(), HostError> {
        if self.max_attempts == 0 {
            return Err(HostError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.exit_keyword.is_empty() {
            return Err(HostError::InvalidConfig(
                "exit_keyword must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}
