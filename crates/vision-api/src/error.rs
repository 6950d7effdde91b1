//! # Service Error Types
//!
//! Error types for Catalog & Billing Service operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Service Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Server              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  Status                 │ │
//! │  │  ConfigLoad     │  │  (connect,      │  │  (non-2xx with the      │ │
//! │  │  ConfigParse    │  │   timeout,      │  │   decoded {"message"}   │ │
//! │  │  ConfigSave     │  │   body decode)  │  │   envelope)             │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Every variant is recoverable: the register shows the message and      │
//! │  the cashier retries. Nothing here aborts the selling flow.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error type covering configuration, transport, and server failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid service configuration.
    #[error("Invalid service configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or write the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoad(#[from] std::io::Error),

    /// Config file is not valid TOML.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize config for saving.
    #[error("Failed to save config: {0}")]
    ConfigSave(#[from] toml::ser::Error),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Connection, timeout, or body decoding failure from the HTTP layer.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    // =========================================================================
    // Server Errors
    // =========================================================================
    /// Non-2xx response with the server's decoded error message.
    #[error("Service responded {status}: {message}")]
    Status { status: u16, message: String },
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ServiceError {
    /// Returns true when the server said the resource does not exist.
    ///
    /// Search-by-id treats this as "no suggestions", not a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Status { status: 404, .. })
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidConfig(_)
                | ServiceError::ConfigLoad(_)
                | ServiceError::ConfigParse(_)
                | ServiceError::ConfigSave(_)
        )
    }

    /// Returns true if the request never produced a response.
    ///
    /// The register treats these as "service offline" and keeps the cart.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ServiceError::Http(e) if e.is_connect() || e.is_timeout())
    }
}
