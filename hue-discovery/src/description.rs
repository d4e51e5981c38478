//! Bridge description parsing and validation
//!
//! This module handles parsing UPnP device description XML and validating
//! that responders are actually Hue bridges.

use serde::Deserialize;

use crate::error::{DiscoveryError, Result};
use crate::DiscoveredBridge;

/// UPnP device description root element
#[derive(Debug, Deserialize)]
pub(crate) struct Root {
    pub device: BridgeDescription,
}

/// Internal device description parsed from XML
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BridgeDescription {
    #[serde(default)]
    pub device_type: String,
    pub friendly_name: String,
    pub manufacturer: String,
    pub model_name: String,
    #[serde(default)]
    pub model_number: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(rename = "UDN")]
    pub udn: String,
}

impl BridgeDescription {
    /// Parse a device description from XML
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::Parse` if the XML is malformed or missing
    /// required fields.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root: Root = quick_xml::de::from_str(xml)
            .map_err(|e| DiscoveryError::Parse(format!("Failed to parse description XML: {}", e)))?;

        Ok(root.device)
    }

    /// Check whether this device is a Hue bridge
    pub fn is_hue_bridge(&self) -> bool {
        let model = self.model_name.to_lowercase();
        let manufacturer = self.manufacturer.to_lowercase();

        model.contains("philips hue bridge")
            || manufacturer.contains("royal philips")
            || manufacturer.contains("signify")
    }

    /// Stable bridge id: the serial number, or the UDN's trailing segment
    pub fn bridge_id(&self) -> String {
        if let Some(serial) = &self.serial_number {
            return serial.to_lowercase();
        }

        self.udn
            .rsplit(['-', ':'])
            .next()
            .unwrap_or(&self.udn)
            .to_lowercase()
    }

    /// Convert to the public bridge type
    pub fn to_bridge(&self, ip_address: String) -> DiscoveredBridge {
        DiscoveredBridge {
            id: self.bridge_id(),
            internal_ip_address: ip_address,
            port: None,
            name: Some(self.friendly_name.clone()),
            model_id: self.model_number.clone(),
        }
    }
}

/// Extract the host portion of a URL
///
/// e.g. "http://192.168.1.10:80/description.xml" yields "192.168.1.10".
pub(crate) fn extract_ip_from_url(url: &str) -> Option<String> {
    url.split("//")
        .nth(1)?
        .split([':', '/'])
        .next()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRIDGE_XML: &str = r#"<?xml version="1.0"?>
<root xmlns="urn:schemas-upnp-org:device-1-0">
  <device>
    <deviceType>urn:schemas-upnp-org:device:Basic:1</deviceType>
    <friendlyName>Philips hue (192.168.1.10)</friendlyName>
    <manufacturer>Royal Philips Electronics</manufacturer>
    <modelName>Philips hue bridge 2015</modelName>
    <modelNumber>BSB002</modelNumber>
    <serialNumber>001788123456</serialNumber>
    <UDN>uuid:2f402f80-da50-11e1-9b23-001788123456</UDN>
  </device>
</root>"#;

    #[test]
    fn test_description_from_xml() {
        let description = BridgeDescription::from_xml(BRIDGE_XML).unwrap();

        assert_eq!(description.friendly_name, "Philips hue (192.168.1.10)");
        assert_eq!(description.manufacturer, "Royal Philips Electronics");
        assert_eq!(description.model_name, "Philips hue bridge 2015");
        assert_eq!(description.serial_number, Some("001788123456".to_string()));
        assert!(description.is_hue_bridge());
    }

    #[test]
    fn test_from_xml_rejects_malformed_input() {
        assert!(BridgeDescription::from_xml("not xml at all").is_err());
        assert!(BridgeDescription::from_xml("<root></root>").is_err());
    }

    #[test]
    fn test_is_hue_bridge_rejects_other_devices() {
        let xml = r#"<?xml version="1.0"?>
<root xmlns="urn:schemas-upnp-org:device-1-0">
  <device>
    <deviceType>urn:schemas-upnp-org:device:Basic:1</deviceType>
    <friendlyName>Router</friendlyName>
    <manufacturer>Other Company</manufacturer>
    <modelName>Router Model</modelName>
    <UDN>uuid:ROUTER123</UDN>
  </device>
</root>"#;

        let description = BridgeDescription::from_xml(xml).unwrap();
        assert!(!description.is_hue_bridge());
    }

    #[test]
    fn test_bridge_id_prefers_serial_number() {
        let description = BridgeDescription::from_xml(BRIDGE_XML).unwrap();
        assert_eq!(description.bridge_id(), "001788123456");
    }

    #[test]
    fn test_bridge_id_falls_back_to_udn_segment() {
        let xml = r#"<?xml version="1.0"?>
<root xmlns="urn:schemas-upnp-org:device-1-0">
  <device>
    <friendlyName>Philips hue</friendlyName>
    <manufacturer>Royal Philips Electronics</manufacturer>
    <modelName>Philips hue bridge 2015</modelName>
    <UDN>uuid:2f402f80-da50-11e1-9b23-001788ABCDEF</UDN>
  </device>
</root>"#;

        let description = BridgeDescription::from_xml(xml).unwrap();
        assert_eq!(description.bridge_id(), "001788abcdef");
    }

    #[test]
    fn test_to_bridge_conversion() {
        let description = BridgeDescription::from_xml(BRIDGE_XML).unwrap();
        let bridge = description.to_bridge("192.168.1.10".to_string());

        assert_eq!(bridge.id, "001788123456");
        assert_eq!(bridge.internal_ip_address, "192.168.1.10");
        assert_eq!(bridge.name, Some("Philips hue (192.168.1.10)".to_string()));
        assert_eq!(bridge.model_id, Some("BSB002".to_string()));
    }

    #[test]
    fn test_extract_ip_from_url() {
        assert_eq!(
            extract_ip_from_url("http://192.168.1.10:80/description.xml"),
            Some("192.168.1.10".to_string())
        );
        assert_eq!(
            extract_ip_from_url("http://10.0.0.5/description.xml"),
            Some("10.0.0.5".to_string())
        );
        assert_eq!(extract_ip_from_url("invalid-url"), None);
    }
}
