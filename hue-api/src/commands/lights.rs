//! Light commands

use serde::Deserialize;
use serde_json::{json, Value};

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::commands::parse_resource_map;
use crate::error::{ApiError, Result};

/// Observed state of a light
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LightState {
    pub on: bool,
    #[serde(rename = "bri")]
    pub brightness: Option<u8>,
    pub hue: Option<u16>,
    #[serde(rename = "sat")]
    pub saturation: Option<u8>,
    #[serde(rename = "ct")]
    pub color_temp: Option<u16>,
    pub reachable: bool,
}

impl LightState {
    /// Writable subset of the state, as a `PUT state` payload
    ///
    /// `reachable` is reported by the bridge, never written.
    fn update_payload(&self) -> Value {
        let mut body = serde_json::Map::new();
        body.insert("on".to_string(), json!(self.on));
        if let Some(brightness) = self.brightness {
            body.insert("bri".to_string(), json!(brightness));
        }
        if let Some(hue) = self.hue {
            body.insert("hue".to_string(), json!(hue));
        }
        if let Some(saturation) = self.saturation {
            body.insert("sat".to_string(), json!(saturation));
        }
        if let Some(color_temp) = self.color_temp {
            body.insert("ct".to_string(), json!(color_temp));
        }
        Value::Object(body)
    }
}

/// A light paired with the bridge
#[derive(Debug, Clone, Deserialize)]
pub struct Light {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "modelid", default)]
    pub model_id: String,
    #[serde(rename = "manufacturername", default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "uniqueid", default)]
    pub unique_id: Option<String>,
    #[serde(rename = "swversion", default)]
    pub software_version: Option<String>,
    #[serde(default)]
    pub state: LightState,
}

/// Retrieve all lights known to the bridge
pub struct GetLights;

impl BridgeCommand for GetLights {
    type Output = Vec<Light>;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("lights".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let entries: Vec<(String, Light)> = parse_resource_map(response)?;
        Ok(entries
            .into_iter()
            .map(|(id, mut light)| {
                light.id = id;
                light
            })
            .collect())
    }
}

/// Retrieve one light by id
pub struct GetLight {
    pub id: String,
}

impl BridgeCommand for GetLight {
    type Output = Light;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated(format!("lights/{}", self.id)))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let mut light: Light =
            serde_json::from_value(response).map_err(|e| ApiError::ParseError(e.to_string()))?;
        light.id = self.id.clone();
        Ok(light)
    }
}

/// Rename a light
pub struct SetLightName {
    pub id: String,
    pub name: String,
}

impl BridgeCommand for SetLightName {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated(format!("lights/{}", self.id)))
            .with_body(json!({"name": self.name}))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

/// Apply a desired state to a light
pub struct SetLightState {
    pub id: String,
    pub state: LightState,
}

impl BridgeCommand for SetLightState {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated(format!(
            "lights/{}/state",
            self.id
        )))
        .with_body(self.state.update_payload())
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

/// Unpair a light from the bridge
pub struct DeleteLight {
    pub id: String,
}

impl BridgeCommand for DeleteLight {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::delete(CommandPath::Authenticated(format!("lights/{}", self.id)))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}
