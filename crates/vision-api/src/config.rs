//! # Service Configuration
//!
//! Configuration for the Catalog & Billing Service connection.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VISION_API_URL=http://192.168.1.20:5000/api                        │
//! │     VISION_API_TIMEOUT_SECS=60                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/vision-pos/service.toml (Linux)                          │
//! │     ~/Library/Application Support/com.vision.pos/service.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:5000/api, 30s request, 10s connect                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # service.toml
//! base_url = "http://localhost:5000/api"
//! timeout_secs = 30
//! connect_timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ServiceError, ServiceResult};

/// Default base URL of the Catalog & Billing Service.
///
/// The `/api` prefix is part of the base: endpoint paths are joined
/// directly onto it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

// =============================================================================
// Service Configuration
// =============================================================================

/// Connection settings for the backend service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl ServiceConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (service.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServiceResult<Self> {
        let mut config = Self::default();

        // Try to load from config file
        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading service config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        // Validate the configuration
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load service config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ServiceResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ServiceError::InvalidConfig("No config path available".into()))?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Service config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ServiceError::InvalidConfig(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ServiceError::InvalidConfig(format!(
                "Base URL must be http or https, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ServiceError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("VISION_API_URL") {
            debug!(url = %url, "Overriding base URL from environment");
            self.base_url = url;
        }

        if let Ok(timeout) = std::env::var("VISION_API_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse::<u64>() {
                self.timeout_secs = t;
            }
        }

        if let Ok(timeout) = std::env::var("VISION_API_CONNECT_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse::<u64>() {
                self.connect_timeout_secs = t;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vision", "pos")
            .map(|dirs| dirs.config_dir().join("service.toml"))
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets the connection timeout in seconds.
    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout as a `Duration`.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
