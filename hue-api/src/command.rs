//! Command contract shared by all bridge operations
//!
//! Every resource operation is expressed as a discrete command value that
//! knows how to describe its own transport request and how to map the raw
//! bridge response into a typed result. Commands are constructed fresh per
//! call, carry no shared mutable state, and are executed through the owning
//! client's transport.

use async_trait::async_trait;
use rest_client::{Method, RestRequest};
use serde_json::Value;

use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Resource path of a command, relative to the bridge's API root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPath {
    /// Served under `/api` without a username segment
    Unauthenticated(String),
    /// Served under `/api/{username}`; requires a configured username
    Authenticated(String),
}

/// Transport-level description of a single command
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub method: Method,
    pub path: CommandPath,
    pub body: Option<Value>,
}

impl CommandRequest {
    pub fn get(path: CommandPath) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: CommandPath) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: CommandPath) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: CommandPath) -> Self {
        Self::new(Method::Delete, path)
    }

    fn new(method: Method, path: CommandPath) -> Self {
        Self {
            method,
            path,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Resolve this description into an executable transport request
    ///
    /// The URL is composed from the client configuration's host and port;
    /// authenticated paths additionally require a username.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthenticated`] when an authenticated path is
    /// requested and the configuration carries no username.
    pub fn into_rest(self, config: &ClientConfig) -> Result<RestRequest> {
        let base = format!("http://{}:{}/api", config.host(), config.port());

        let url = match &self.path {
            CommandPath::Unauthenticated(path) if path.is_empty() => base,
            CommandPath::Unauthenticated(path) => format!("{}/{}", base, path),
            CommandPath::Authenticated(path) => {
                let username = config.username().ok_or(ApiError::Unauthenticated)?;
                if path.is_empty() {
                    format!("{}/{}", base, username)
                } else {
                    format!("{}/{}/{}", base, username, path)
                }
            }
        };

        Ok(RestRequest {
            method: self.method,
            url,
            body: self.body,
            timeout: config.timeout(),
        })
    }
}

/// A single unit of intent against a bridge
///
/// Implementations describe the request they perform and how to interpret
/// the response; the provided [`invoke`](BridgeCommand::invoke) drives the
/// round trip through the client's shared transport. Commands must not fail
/// before the transport is reached, other than for a missing username.
#[async_trait]
pub trait BridgeCommand: Send + Sync {
    /// Typed result produced by this command
    type Output: Send;

    /// Describe the transport request this command performs
    fn request(&self) -> CommandRequest;

    /// Map the raw bridge response into the command's output
    fn parse(&self, response: Value) -> Result<Self::Output>;

    /// Execute this command through the given client's transport
    async fn invoke(&self, client: &Client) -> Result<Self::Output> {
        let config = client.config();
        let request = self.request().into_rest(&config)?;

        tracing::debug!(method = ?request.method, url = %request.url, "invoking bridge command");

        let response = client.transport().execute(request).await?;
        self.parse(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config() -> ClientConfig {
        ClientConfig::new("192.168.1.10").with_username("testuser")
    }

    #[rstest]
    #[case::unauthenticated(
        CommandPath::Unauthenticated("config".to_string()),
        "http://192.168.1.10:80/api/config"
    )]
    #[case::unauthenticated_empty_path_is_api_root(
        CommandPath::Unauthenticated(String::new()),
        "http://192.168.1.10:80/api"
    )]
    #[case::authenticated_includes_username(
        CommandPath::Authenticated("lights/1".to_string()),
        "http://192.168.1.10:80/api/testuser/lights/1"
    )]
    #[case::authenticated_empty_path(
        CommandPath::Authenticated(String::new()),
        "http://192.168.1.10:80/api/testuser"
    )]
    fn test_url_composition(#[case] path: CommandPath, #[case] expected: &str) {
        let request = CommandRequest::get(path).into_rest(&config()).unwrap();

        assert_eq!(request.url, expected);
    }

    #[test]
    fn test_authenticated_path_without_username_fails() {
        let config = ClientConfig::new("192.168.1.10");
        let result = CommandRequest::get(CommandPath::Authenticated("config".to_string()))
            .into_rest(&config);

        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[test]
    fn test_custom_port_in_url() {
        let config = ClientConfig::new("bridge.local").with_port(8080);
        let request = CommandRequest::get(CommandPath::Unauthenticated("config".to_string()))
            .into_rest(&config)
            .unwrap();

        assert_eq!(request.url, "http://bridge.local:8080/api/config");
    }
}
