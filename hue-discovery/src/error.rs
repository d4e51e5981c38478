//! Error types for the discovery system

use thiserror::Error;

/// Error type for discovery operations
///
/// Covers configuration errors (raised synchronously, before any network
/// activity) and the network and parsing failures a strategy can hit while
/// scanning.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The requested strategy is not registered in this environment
    #[error("Discovery strategy {0} not valid")]
    UnknownStrategy(String),

    /// Network-related errors (socket creation, HTTP requests, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing errors (lookup service JSON, SSDP response, description XML)
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience Result type alias for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
