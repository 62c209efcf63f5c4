//! Error types for the WMS client crates.

use thiserror::Error;

/// Result type alias using WmsError.
pub type WmsResult<T> = Result<T, WmsError>;

/// Primary error type for WMS client operations.
#[derive(Debug, Error)]
pub enum WmsError {
    // === Configuration Errors ===
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Failed to read configuration: {0}")]
    ConfigRead(String),

    // === Protocol Errors ===
    #[error("Failed to parse capabilities document: {0}")]
    CapabilitiesParse(String),

    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    // === Transport Errors ===
    #[error("Failed to fetch from WMS endpoint: {0}")]
    FetchFailed(String),
}

impl WmsError {
    /// Shorthand for a [`WmsError::InvalidConfig`] error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        WmsError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from the network side rather than the document or config.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, WmsError::FetchFailed(_))
    }
}

// Conversion from common error types
impl From<std::io::Error> for WmsError {
    fn from(err: std::io::Error) -> Self {
        WmsError::ConfigRead(err.to_string())
    }
}

impl From<serde_yaml::Error> for WmsError {
    fn from(err: serde_yaml::Error) -> Self {
        WmsError::ConfigRead(format!("YAML error: {}", err))
    }
}
