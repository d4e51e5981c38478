//! Private REST client for bridge communication
//!
//! This crate provides a minimal JSON-over-HTTP client specifically designed
//! for talking to home-automation bridges. The bridge reports failures as a
//! structured error payload inside an HTTP 200 response, so this client
//! inspects every response body and surfaces those as [`RestError::Bridge`].

mod error;

pub use error::RestError;

use std::time::Duration;

use serde_json::Value;

/// HTTP method for a bridge request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A single request against a bridge
///
/// The URL is absolute; callers are responsible for composing it from the
/// bridge's host, port, and resource path. The timeout applies to the whole
/// request, connect included.
#[derive(Debug, Clone)]
pub struct RestRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// A minimal JSON/REST client for bridge communication
#[derive(Debug, Clone, Default)]
pub struct RestClient {
    http: reqwest::Client,
}

impl RestClient {
    /// Create a new REST client with default configuration
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Execute a request and return the decoded response body
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Network`] on connection or timeout failures,
    /// [`RestError::Parse`] when the body is not valid JSON, and
    /// [`RestError::Bridge`] when the bridge answered with its structured
    /// error payload.
    pub async fn execute(&self, request: RestRequest) -> Result<Value, RestError> {
        let builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
            Method::Put => self.http.put(&request.url),
            Method::Delete => self.http.delete(&request.url),
        };

        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| RestError::Network(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| RestError::Network(e.to_string()))?;

        let value: Value =
            serde_json::from_str(&text).map_err(|e| RestError::Parse(e.to_string()))?;

        extract_error(&value)?;

        Ok(value)
    }
}

/// Surface the first structured bridge error found in a response
///
/// Bridges report failures as an array of `{"error": {...}}` entries, even
/// when the HTTP status is 200.
fn extract_error(value: &Value) -> Result<(), RestError> {
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => return Ok(()),
    };

    for entry in entries {
        if let Some(error) = entry.get("error") {
            let code = error
                .get("type")
                .and_then(Value::as_u64)
                .unwrap_or(0) as u16;
            let description = error
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("unknown bridge error")
                .to_string();
            return Err(RestError::Bridge { code, description });
        }
    }

    Ok(())
}
