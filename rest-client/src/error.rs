//! Error types for the REST client

use thiserror::Error;

/// Errors that can occur while talking to a bridge
#[derive(Debug, Error)]
pub enum RestError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Response body could not be decoded as JSON
    #[error("JSON parsing error: {0}")]
    Parse(String),

    /// Structured error returned by the bridge
    #[error("Bridge error {code}: {description}")]
    Bridge {
        /// Error type from the bridge's own error taxonomy
        code: u16,
        /// Human-readable description reported by the bridge
        description: String,
    },
}
