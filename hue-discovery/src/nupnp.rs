//! N-UPnP strategy: query the vendor's bridge lookup service
//!
//! Bridges phone home periodically, and the vendor exposes a lookup
//! service that answers with the bridges registered from the caller's
//! public address. This strategy needs no local network capabilities,
//! so it is registered unconditionally.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{DiscoveryError, Result};
use crate::strategy::DiscoveryStrategy;
use crate::DiscoveredBridge;

const LOOKUP_ENDPOINT: &str = "https://discovery.meethue.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Record returned by the lookup service
#[derive(Debug, Deserialize)]
struct LookupRecord {
    id: String,
    #[serde(rename = "internalipaddress")]
    internal_ip_address: String,
    #[serde(default)]
    port: Option<u16>,
}

impl LookupRecord {
    fn into_bridge(self) -> DiscoveredBridge {
        DiscoveredBridge {
            id: self.id,
            internal_ip_address: self.internal_ip_address,
            port: self.port,
            name: None,
            model_id: None,
        }
    }
}

/// Lookup-service discovery strategy
pub struct NupnpStrategy {
    endpoint: String,
    http: reqwest::Client,
}

impl NupnpStrategy {
    pub fn new() -> Self {
        Self::with_endpoint(LOOKUP_ENDPOINT)
    }

    /// Use a custom lookup endpoint (tests, self-hosted relays)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for NupnpStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiscoveryStrategy for NupnpStrategy {
    fn name(&self) -> &'static str {
        "nupnp"
    }

    async fn discover(&self) -> Result<Vec<DiscoveredBridge>> {
        let response = self
            .http
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| DiscoveryError::Network(format!("lookup service request failed: {}", e)))?;

        let records: Vec<LookupRecord> = response
            .json()
            .await
            .map_err(|e| DiscoveryError::Parse(format!("lookup service response: {}", e)))?;

        tracing::debug!(count = records.len(), "nupnp lookup answered");

        Ok(records.into_iter().map(LookupRecord::into_bridge).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_record_deserialization() {
        let json = r#"[{"id":"001788fffe123456","internalipaddress":"192.168.1.10"}]"#;

        let records: Vec<LookupRecord> = serde_json::from_str(json).unwrap();
        let bridge = records.into_iter().next().unwrap().into_bridge();

        assert_eq!(bridge.id, "001788fffe123456");
        assert_eq!(bridge.internal_ip_address, "192.168.1.10");
        assert_eq!(bridge.port, None);
        assert_eq!(bridge.name, None);
    }

    #[test]
    fn test_lookup_record_with_port() {
        let json = r#"[{"id":"abc","internalipaddress":"10.0.0.5","port":443}]"#;

        let records: Vec<LookupRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].port, Some(443));
    }

    #[tokio::test]
    async fn test_discover_against_mock_lookup_service() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"[{"id":"001788fffe123456","internalipaddress":"192.168.1.10"}]"#)
            .create_async()
            .await;

        let strategy = NupnpStrategy::with_endpoint(server.url());
        let bridges = strategy.discover().await.unwrap();

        assert_eq!(bridges.len(), 1);
        assert_eq!(bridges[0].id, "001788fffe123456");
    }

    #[tokio::test]
    async fn test_discover_surfaces_malformed_response_as_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let strategy = NupnpStrategy::with_endpoint(server.url());

        match strategy.discover().await.unwrap_err() {
            DiscoveryError::Parse(_) => {}
            other => panic!("Expected DiscoveryError::Parse, got {:?}", other),
        }
    }
}
