use rest_client::RestError;
use thiserror::Error;

/// High-level API errors for bridge operations
///
/// This enum provides domain-specific error types that abstract away the
/// underlying REST communication details and carry the bridge's own error
/// taxonomy for structured failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// This error occurs when there are network-level issues communicating
    /// with the bridge, such as connection timeouts, DNS resolution failures,
    /// or the bridge being unreachable.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response parsing error
    ///
    /// This error occurs when the bridge returns a valid response but the
    /// response content cannot be mapped into the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Structured error returned by the bridge
    ///
    /// The `code` field carries the numeric error type from the bridge's
    /// own error taxonomy (e.g. 1 = unauthorized user, 101 = link button
    /// not pressed).
    #[error("Bridge error {code}: {message}")]
    Bridge { code: u16, message: String },

    /// A resource requested by key does not exist on the bridge
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// An authenticated resource was requested without a configured username
    #[error("Username is not configured on this client")]
    Unauthenticated,
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from RestError to ApiError
impl From<RestError> for ApiError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Network(msg) => ApiError::NetworkError(msg),
            RestError::Parse(msg) => ApiError::ParseError(msg),
            RestError::Bridge { code, description } => ApiError::Bridge {
                code,
                message: description,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_error_conversion() {
        let rest_error = RestError::Network("connection timeout".to_string());
        let api_error: ApiError = rest_error.into();
        assert!(matches!(api_error, ApiError::NetworkError(_)));

        let rest_error = RestError::Parse("invalid JSON".to_string());
        let api_error: ApiError = rest_error.into();
        assert!(matches!(api_error, ApiError::ParseError(_)));

        let rest_error = RestError::Bridge {
            code: 101,
            description: "link button not pressed".to_string(),
        };
        let api_error: ApiError = rest_error.into();
        match api_error {
            ApiError::Bridge { code, message } => {
                assert_eq!(code, 101);
                assert_eq!(message, "link button not pressed");
            }
            other => panic!("Expected ApiError::Bridge, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let network_err = ApiError::NetworkError("connection failed".to_string());
        assert_eq!(format!("{}", network_err), "Network error: connection failed");

        let bridge_err = ApiError::Bridge {
            code: 1,
            message: "unauthorized user".to_string(),
        };
        assert_eq!(format!("{}", bridge_err), "Bridge error 1: unauthorized user");
    }
}
