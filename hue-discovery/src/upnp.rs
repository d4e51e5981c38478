//! UPnP strategy: multicast probe for bridges on the local network
//!
//! Sends an SSDP M-SEARCH, filters responders down to likely bridges,
//! then confirms each candidate by fetching and validating its device
//! description. Only registered in environments with multicast access.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;

use crate::description::{extract_ip_from_url, BridgeDescription};
use crate::error::{DiscoveryError, Result};
use crate::ssdp::{SsdpClient, SsdpResponse};
use crate::strategy::DiscoveryStrategy;
use crate::DiscoveredBridge;

const SEARCH_TARGET: &str = "ssdp:all";
const RESPONSE_WINDOW: Duration = Duration::from_secs(3);
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Local-multicast discovery strategy
pub struct UpnpStrategy {
    window: Duration,
    http: reqwest::Client,
}

impl UpnpStrategy {
    pub fn new() -> Self {
        Self::with_window(RESPONSE_WINDOW)
    }

    /// Use a custom listen window for SSDP responses
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            http: reqwest::Client::new(),
        }
    }

    /// Early filter: does this responder look like a bridge?
    ///
    /// Bridges advertise a vendor id header and an `IpBridge` server
    /// token; anything matching either is worth a description fetch.
    fn is_likely_bridge(response: &SsdpResponse) -> bool {
        if response.bridge_id.is_some() {
            return true;
        }

        if let Some(server) = &response.server {
            if server.contains("IpBridge") {
                return true;
            }
        }

        false
    }

    async fn fetch_description(&self, location: &str) -> Result<BridgeDescription> {
        let response = self
            .http
            .get(location)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| DiscoveryError::Network(format!("Failed to fetch description: {}", e)))?;

        let xml = response
            .text()
            .await
            .map_err(|e| DiscoveryError::Network(format!("Failed to read description body: {}", e)))?;

        BridgeDescription::from_xml(&xml)
    }
}

impl Default for UpnpStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiscoveryStrategy for UpnpStrategy {
    fn name(&self) -> &'static str {
        "upnp"
    }

    async fn discover(&self) -> Result<Vec<DiscoveredBridge>> {
        let client = SsdpClient::new().await?;
        let responses = client.search(SEARCH_TARGET, self.window).await?;

        let mut seen_locations = HashSet::new();
        let mut bridges = Vec::new();

        for response in responses {
            tracing::trace!(st = %response.st, usn = %response.usn, "ssdp responder");

            // Devices answer M-SEARCH once per advertised service.
            if !seen_locations.insert(response.location.clone()) {
                continue;
            }

            if !Self::is_likely_bridge(&response) {
                continue;
            }

            let description = match self.fetch_description(&response.location).await {
                Ok(description) => description,
                Err(_) => continue, // skip responders whose description cannot be fetched
            };

            if !description.is_hue_bridge() {
                continue;
            }

            let ip_address = match extract_ip_from_url(&response.location) {
                Some(ip_address) => ip_address,
                None => continue,
            };

            bridges.push(description.to_bridge(ip_address));
        }

        tracing::debug!(count = bridges.len(), "upnp scan complete");
        Ok(bridges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(server: Option<&str>, bridge_id: Option<&str>) -> SsdpResponse {
        SsdpResponse {
            location: "http://192.168.1.10:80/description.xml".to_string(),
            st: "upnp:rootdevice".to_string(),
            usn: "uuid:2f402f80::upnp:rootdevice".to_string(),
            server: server.map(str::to_string),
            bridge_id: bridge_id.map(str::to_string),
        }
    }

    #[test]
    fn test_is_likely_bridge_by_vendor_header() {
        assert!(UpnpStrategy::is_likely_bridge(&response(
            None,
            Some("001788FFFE123456")
        )));
    }

    #[test]
    fn test_is_likely_bridge_by_server_token() {
        assert!(UpnpStrategy::is_likely_bridge(&response(
            Some("Hue/1.0 UPnP/1.0 IpBridge/1.50.0"),
            None
        )));
    }

    #[test]
    fn test_is_likely_bridge_rejects_other_devices() {
        assert!(!UpnpStrategy::is_likely_bridge(&response(
            Some("Linux/3.14 UPnP/1.0 SomeTV/1.0"),
            None
        )));
        assert!(!UpnpStrategy::is_likely_bridge(&response(None, None)));
    }
}
