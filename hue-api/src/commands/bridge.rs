//! Bridge settings commands

use serde::Deserialize;
use serde_json::{json, Value};

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::error::{ApiError, Result};

/// Bridge settings as reported by the `config` resource
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    #[serde(rename = "bridgeid", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "modelid", default)]
    pub model_id: String,
    #[serde(rename = "factorynew", default)]
    pub factory_new: bool,
    #[serde(rename = "replacesbridgeid", default)]
    pub replaces_bridge_id: Option<String>,
    #[serde(rename = "datastoreversion", default)]
    pub data_store_version: Option<String>,
    #[serde(rename = "starterkitid", default)]
    pub starter_kit_id: Option<String>,
    #[serde(rename = "swversion", default)]
    pub software_version: String,
    #[serde(rename = "apiversion", default)]
    pub api_version: String,
    #[serde(rename = "zigbeechannel", default)]
    pub zigbee_channel: u8,
    #[serde(rename = "mac", default)]
    pub mac_address: String,
    #[serde(rename = "ipaddress", default)]
    pub ip_address: String,
    #[serde(rename = "dhcp", default)]
    pub dhcp_enabled: bool,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "proxyaddress", default)]
    pub proxy_address: String,
    #[serde(rename = "proxyport", default)]
    pub proxy_port: u16,
    #[serde(rename = "UTC", default)]
    pub utc_time: Option<String>,
    #[serde(rename = "timezone", default)]
    pub time_zone: Option<String>,
    #[serde(rename = "localtime", default)]
    pub local_time: Option<String>,
    #[serde(rename = "portalservices", default)]
    pub portal_services_enabled: bool,
    #[serde(rename = "portalconnection", default)]
    pub portal_connection: Option<String>,
    #[serde(rename = "linkbutton", default)]
    pub link_button_enabled: bool,
    #[serde(rename = "touchlink", default)]
    pub touchlink_enabled: bool,
}

impl BridgeConfig {
    /// Writable subset of the settings, as a `PUT config` payload
    fn update_payload(&self) -> Value {
        let mut body = serde_json::Map::new();
        body.insert("name".to_string(), json!(self.name));
        body.insert("zigbeechannel".to_string(), json!(self.zigbee_channel));
        body.insert("dhcp".to_string(), json!(self.dhcp_enabled));
        body.insert("proxyaddress".to_string(), json!(self.proxy_address));
        body.insert("proxyport".to_string(), json!(self.proxy_port));
        if let Some(time_zone) = &self.time_zone {
            body.insert("timezone".to_string(), json!(time_zone));
        }
        Value::Object(body)
    }
}

/// Retrieve the bridge settings
pub struct GetBridge;

impl BridgeCommand for GetBridge {
    type Output = BridgeConfig;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("config".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        serde_json::from_value(response).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

/// Persist the writable bridge settings
pub struct SaveBridge {
    pub bridge: BridgeConfig,
}

impl BridgeCommand for SaveBridge {
    type Output = BridgeConfig;

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated("config".to_string()))
            .with_body(self.bridge.update_payload())
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(self.bridge.clone())
    }
}

/// Probe bridge reachability without credentials
///
/// The `config` resource answers a trimmed payload to unauthenticated
/// callers, which is enough to know the bridge is there.
pub struct Ping;

impl BridgeCommand for Ping {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Unauthenticated("config".to_string()))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

/// Verify the configured username is accepted by the bridge
///
/// An unregistered username makes the bridge answer its structured error
/// payload, which the transport surfaces before `parse` runs.
pub struct IsAuthenticated;

impl BridgeCommand for IsAuthenticated {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("config".to_string()))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

/// Enable the link button for 30 seconds, allowing user creation
pub struct LinkButton;

impl BridgeCommand for LinkButton {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated("config".to_string()))
            .with_body(json!({"linkbutton": true}))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

/// Start a touchlink scan for nearby lights
pub struct Touchlink;

impl BridgeCommand for Touchlink {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated("config".to_string()))
            .with_body(json!({"touchlink": true}))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_client::Method;
    use serde_json::json;

    #[test]
    fn test_get_bridge_request() {
        let request = GetBridge.request();

        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.path,
            CommandPath::Authenticated("config".to_string())
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_get_bridge_parse() {
        let response = json!({
            "bridgeid": "001788FFFE123456",
            "name": "Philips hue",
            "modelid": "BSB002",
            "swversion": "1953188020",
            "apiversion": "1.50.0",
            "zigbeechannel": 15,
            "mac": "00:17:88:12:34:56",
            "ipaddress": "192.168.1.10",
            "dhcp": true,
            "netmask": "255.255.255.0",
            "gateway": "192.168.1.1",
            "UTC": "2023-04-01T12:00:00",
            "timezone": "Europe/Amsterdam",
            "linkbutton": false,
            "factorynew": false
        });

        let bridge = GetBridge.parse(response).unwrap();

        assert_eq!(bridge.id, "001788FFFE123456");
        assert_eq!(bridge.name, "Philips hue");
        assert_eq!(bridge.model_id, "BSB002");
        assert_eq!(bridge.zigbee_channel, 15);
        assert_eq!(bridge.time_zone, Some("Europe/Amsterdam".to_string()));
        assert!(!bridge.link_button_enabled);
    }

    #[test]
    fn test_ping_is_unauthenticated() {
        let request = Ping.request();

        assert_eq!(
            request.path,
            CommandPath::Unauthenticated("config".to_string())
        );
    }

    #[test]
    fn test_link_button_payload() {
        let request = LinkButton.request();

        assert_eq!(request.method, Method::Put);
        assert_eq!(request.body, Some(json!({"linkbutton": true})));
    }

    #[test]
    fn test_touchlink_payload() {
        let request = Touchlink.request();

        assert_eq!(request.body, Some(json!({"touchlink": true})));
    }

    #[test]
    fn test_save_bridge_sends_writable_subset() {
        let bridge = GetBridge
            .parse(json!({
                "bridgeid": "001788FFFE123456",
                "name": "Renamed bridge",
                "zigbeechannel": 20,
                "dhcp": false,
                "proxyaddress": "none",
                "proxyport": 0,
                "timezone": "UTC"
            }))
            .unwrap();

        let request = SaveBridge { bridge }.request();
        let body = request.body.unwrap();

        assert_eq!(body["name"], "Renamed bridge");
        assert_eq!(body["zigbeechannel"], 20);
        assert_eq!(body["timezone"], "UTC");
        // Read-only identity fields never go back to the bridge.
        assert!(body.get("bridgeid").is_none());
        assert!(body.get("mac").is_none());
    }
}
