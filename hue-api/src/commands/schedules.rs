//! Schedule commands

use serde::Deserialize;
use serde_json::{json, Value};

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::commands::{parse_resource_map, success_field};
use crate::error::{ApiError, Result};

/// A timed action stored on the bridge
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schedule {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The bridge-local request to run when the schedule fires
    #[serde(default)]
    pub command: Option<Value>,
    #[serde(rename = "localtime", default)]
    pub local_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Schedule {
    fn payload(&self) -> Value {
        let mut body = serde_json::Map::new();
        body.insert("name".to_string(), json!(self.name));
        body.insert("description".to_string(), json!(self.description));
        if let Some(command) = &self.command {
            body.insert("command".to_string(), command.clone());
        }
        if let Some(local_time) = &self.local_time {
            body.insert("localtime".to_string(), json!(local_time));
        }
        if let Some(status) = &self.status {
            body.insert("status".to_string(), json!(status));
        }
        Value::Object(body)
    }
}

/// Retrieve all schedules
pub struct GetSchedules;

impl BridgeCommand for GetSchedules {
    type Output = Vec<Schedule>;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("schedules".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let entries: Vec<(String, Schedule)> = parse_resource_map(response)?;
        Ok(entries
            .into_iter()
            .map(|(id, mut schedule)| {
                schedule.id = id;
                schedule
            })
            .collect())
    }
}

/// Retrieve one schedule by id
pub struct GetSchedule {
    pub id: String,
}

impl BridgeCommand for GetSchedule {
    type Output = Schedule;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated(format!("schedules/{}", self.id)))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let mut schedule: Schedule =
            serde_json::from_value(response).map_err(|e| ApiError::ParseError(e.to_string()))?;
        schedule.id = self.id.clone();
        Ok(schedule)
    }
}

/// Store a new schedule
pub struct CreateSchedule {
    pub schedule: Schedule,
}

impl BridgeCommand for CreateSchedule {
    type Output = Schedule;

    fn request(&self) -> CommandRequest {
        CommandRequest::post(CommandPath::Authenticated("schedules".to_string()))
            .with_body(self.schedule.payload())
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let id = success_field(&response, "id")?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ApiError::ParseError("schedule id is not a string".to_string()))?;

        let mut schedule = self.schedule.clone();
        schedule.id = id;
        Ok(schedule)
    }
}

/// Persist changes to a schedule
pub struct SaveSchedule {
    pub schedule: Schedule,
}

impl BridgeCommand for SaveSchedule {
    type Output = Schedule;

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated(format!(
            "schedules/{}",
            self.schedule.id
        )))
        .with_body(self.schedule.payload())
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(self.schedule.clone())
    }
}

/// Delete a schedule
pub struct DeleteSchedule {
    pub id: String,
}

impl BridgeCommand for DeleteSchedule {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::delete(CommandPath::Authenticated(format!("schedules/{}", self.id)))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_schedule_payload_includes_command() {
        let command = CreateSchedule {
            schedule: Schedule {
                name: "Wake up".to_string(),
                description: "Morning ramp".to_string(),
                command: Some(json!({
                    "address": "/api/user/lights/1/state",
                    "method": "PUT",
                    "body": {"on": true}
                })),
                local_time: Some("W124/T06:30:00".to_string()),
                ..Schedule::default()
            },
        };

        let body = command.request().body.unwrap();

        assert_eq!(body["name"], "Wake up");
        assert_eq!(body["localtime"], "W124/T06:30:00");
        assert_eq!(body["command"]["method"], "PUT");
    }

    #[test]
    fn test_create_schedule_parse_assigns_id() {
        let command = CreateSchedule {
            schedule: Schedule {
                name: "Wake up".to_string(),
                ..Schedule::default()
            },
        };

        let schedule = command.parse(json!([{"success": {"id": "3"}}])).unwrap();

        assert_eq!(schedule.id, "3");
        assert_eq!(schedule.name, "Wake up");
    }

    #[test]
    fn test_get_schedules_parse() {
        let response = json!({
            "1": {"name": "Wake up", "description": "", "status": "enabled"}
        });

        let schedules = GetSchedules.parse(response).unwrap();

        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].id, "1");
        assert_eq!(schedules[0].status, Some("enabled".to_string()));
    }
}
