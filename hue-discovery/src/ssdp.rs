//! SSDP (Simple Service Discovery Protocol) plumbing for bridge discovery
//!
//! This module provides the internal M-SEARCH client used by the multicast
//! strategy. It is not part of the public API.

use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::{timeout, Instant};

use crate::error::{DiscoveryError, Result};

const SSDP_MULTICAST_ADDR: &str = "239.255.255.250:1900";

/// SSDP response headers relevant to bridge discovery
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SsdpResponse {
    pub location: String,
    pub st: String,
    pub usn: String,
    pub server: Option<String>,
    /// Bridges advertise their id in a vendor header
    pub bridge_id: Option<String>,
}

/// SSDP client for device discovery
pub(crate) struct SsdpClient {
    socket: UdpSocket,
}

impl SsdpClient {
    pub async fn new() -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| DiscoveryError::Network(format!("Failed to bind UDP socket: {}", e)))?;

        Ok(Self { socket })
    }

    /// Send an M-SEARCH request and collect responses until the window closes
    ///
    /// Malformed and non-UTF-8 datagrams are skipped; only hard socket
    /// errors abort the scan.
    pub async fn search(&self, search_target: &str, window: Duration) -> Result<Vec<SsdpResponse>> {
        let request = format!(
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: 239.255.255.250:1900\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: 2\r\n\
             ST: {}\r\n\
             \r\n",
            search_target
        );

        self.socket
            .send_to(request.as_bytes(), SSDP_MULTICAST_ADDR)
            .await
            .map_err(|e| DiscoveryError::Network(format!("Failed to send M-SEARCH: {}", e)))?;

        let mut responses = Vec::new();
        let mut buffer = [0u8; 2048];
        let deadline = Instant::now() + window;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            match timeout(remaining, self.socket.recv_from(&mut buffer)).await {
                Ok(Ok((size, _))) => {
                    if let Ok(text) = std::str::from_utf8(&buffer[..size]) {
                        if let Some(response) = parse_ssdp_response(text) {
                            responses.push(response);
                        }
                    }
                }
                Ok(Err(e)) => {
                    return Err(DiscoveryError::Network(format!("Socket error: {}", e)));
                }
                Err(_) => break, // window elapsed
            }
        }

        Ok(responses)
    }
}

/// Parse an SSDP response from HTTP text
fn parse_ssdp_response(response: &str) -> Option<SsdpResponse> {
    let mut location = None;
    let mut st = None;
    let mut usn = None;
    let mut server = None;
    let mut bridge_id = None;

    for line in response.lines() {
        let line = line.trim();

        if let Some(value) = extract_header_value(line, "LOCATION:") {
            location = Some(value);
        } else if let Some(value) = extract_header_value(line, "ST:") {
            st = Some(value);
        } else if let Some(value) = extract_header_value(line, "USN:") {
            usn = Some(value);
        } else if let Some(value) = extract_header_value(line, "SERVER:") {
            server = Some(value);
        } else if let Some(value) = extract_header_value(line, "HUE-BRIDGEID:") {
            bridge_id = Some(value);
        }
    }

    match (location, st, usn) {
        (Some(location), Some(st), Some(usn)) => Some(SsdpResponse {
            location,
            st,
            usn,
            server,
            bridge_id,
        }),
        _ => None,
    }
}

/// Extract header value from a line like "HEADER: value"
fn extract_header_value(line: &str, header: &str) -> Option<String> {
    if line.len() > header.len() && line[..header.len()].eq_ignore_ascii_case(header) {
        Some(line[header.len()..].trim().to_string())
    } else {
        None
    }
}
