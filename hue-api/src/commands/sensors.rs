//! Sensor commands

use serde::Deserialize;
use serde_json::{json, Value};

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::commands::parse_resource_map;
use crate::error::{ApiError, Result};

/// A sensor paired with the bridge
///
/// Sensor state and config vary wildly by sensor type, so both are kept as
/// raw JSON rather than modeled field by field.
#[derive(Debug, Clone, Deserialize)]
pub struct Sensor {
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
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default)]
    pub config: Option<Value>,
}

/// Retrieve all sensors
pub struct GetSensors;

impl BridgeCommand for GetSensors {
    type Output = Vec<Sensor>;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("sensors".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let entries: Vec<(String, Sensor)> = parse_resource_map(response)?;
        Ok(entries
            .into_iter()
            .map(|(id, mut sensor)| {
                sensor.id = id;
                sensor
            })
            .collect())
    }
}

/// Retrieve one sensor by id
pub struct GetSensor {
    pub id: String,
}

impl BridgeCommand for GetSensor {
    type Output = Sensor;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated(format!("sensors/{}", self.id)))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let mut sensor: Sensor =
            serde_json::from_value(response).map_err(|e| ApiError::ParseError(e.to_string()))?;
        sensor.id = self.id.clone();
        Ok(sensor)
    }
}

/// Rename a sensor
pub struct SetSensorName {
    pub id: String,
    pub name: String,
}

impl BridgeCommand for SetSensorName {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated(format!("sensors/{}", self.id)))
            .with_body(json!({"name": self.name}))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

/// Remove a sensor from the bridge
pub struct DeleteSensor {
    pub id: String,
}

impl BridgeCommand for DeleteSensor {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::delete(CommandPath::Authenticated(format!("sensors/{}", self.id)))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_sensors_parse_keeps_raw_state() {
        let response = json!({
            "1": {
                "name": "Hue motion sensor",
                "type": "ZLLPresence",
                "modelid": "SML001",
                "state": {"presence": false, "lastupdated": "2023-04-01T10:00:00"}
            }
        });

        let sensors = GetSensors.parse(response).unwrap();

        assert_eq!(sensors.len(), 1);
        assert_eq!(sensors[0].id, "1");
        assert_eq!(sensors[0].kind, "ZLLPresence");
        assert_eq!(sensors[0].state.as_ref().unwrap()["presence"], false);
    }

    #[test]
    fn test_set_sensor_name_payload() {
        let request = SetSensorName {
            id: "2".to_string(),
            name: "Hallway motion".to_string(),
        }
        .request();

        assert_eq!(request.body, Some(json!({"name": "Hallway motion"})));
    }
}
