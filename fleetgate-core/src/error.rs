/// Structured error types for fleetgate-core.
///
/// Uses `thiserror` for composable errors. The server binary wraps these in
/// `anyhow` at the top level; library consumers keep the structured variants.
use thiserror::Error;

/// Main error type for fleetgate-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration file unreadable or invalid
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Month parameter not in `YYYY-MM` form or out of range
    #[error("Invalid month '{value}': {reason}")]
    InvalidMonth { value: String, reason: String },
}

/// Result type alias for fleetgate-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an invalid month error
    pub fn invalid_month(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMonth {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
