//! Client configuration

use std::time::Duration;

/// Default port a bridge listens on
pub const DEFAULT_PORT: u16 = 80;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Configuration for a [`Client`](crate::Client)
///
/// Only the host is required; every other field falls back to a documented
/// default. No validation is performed at this layer; an unreachable host
/// or an unregistered username surfaces later, at command invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    port: u16,
    username: Option<String>,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given bridge host
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the bridge port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the username used for authenticated resources
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("192.168.1.10");

        assert_eq!(config.host(), "192.168.1.10");
        assert_eq!(config.port(), 80);
        assert_eq!(config.username(), None);
        assert_eq!(config.timeout(), Duration::from_millis(15_000));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("bridge.local")
            .with_port(8080)
            .with_username("abcdef0123456789")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.port(), 8080);
        assert_eq!(config.username(), Some("abcdef0123456789"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_setters_round_trip() {
        let mut config = ClientConfig::new("bridge.local");

        config.set_host("10.0.0.2");
        config.set_port(443);
        config.set_username(Some("user".to_string()));
        config.set_timeout(Duration::from_secs(30));

        assert_eq!(config.host(), "10.0.0.2");
        assert_eq!(config.port(), 443);
        assert_eq!(config.username(), Some("user"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
