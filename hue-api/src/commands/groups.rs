//! Group commands

use serde::Deserialize;
use serde_json::{json, Value};

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::commands::{parse_resource_map, success_field};
use crate::error::{ApiError, Result};

/// A group of lights
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "lights", default)]
    pub light_ids: Vec<String>,
}

/// Retrieve all groups
pub struct GetGroups;

impl BridgeCommand for GetGroups {
    type Output = Vec<Group>;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("groups".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let entries: Vec<(String, Group)> = parse_resource_map(response)?;
        Ok(entries
            .into_iter()
            .map(|(id, mut group)| {
                group.id = id;
                group
            })
            .collect())
    }
}

/// Retrieve one group by id
pub struct GetGroup {
    pub id: String,
}

impl BridgeCommand for GetGroup {
    type Output = Group;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated(format!("groups/{}", self.id)))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let mut group: Group =
            serde_json::from_value(response).map_err(|e| ApiError::ParseError(e.to_string()))?;
        group.id = self.id.clone();
        Ok(group)
    }
}

/// Create a group over the given lights
pub struct CreateGroup {
    pub name: String,
    pub light_ids: Vec<String>,
}

impl BridgeCommand for CreateGroup {
    type Output = Group;

    fn request(&self) -> CommandRequest {
        CommandRequest::post(CommandPath::Authenticated("groups".to_string())).with_body(json!({
            "name": self.name,
            "lights": self.light_ids,
        }))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let id = success_field(&response, "id")?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ApiError::ParseError("group id is not a string".to_string()))?;

        Ok(Group {
            id,
            name: self.name.clone(),
            kind: "LightGroup".to_string(),
            light_ids: self.light_ids.clone(),
        })
    }
}

/// Persist a group's name and membership
pub struct SaveGroup {
    pub group: Group,
}

impl BridgeCommand for SaveGroup {
    type Output = Group;

    fn request(&self) -> CommandRequest {
        CommandRequest::put(CommandPath::Authenticated(format!(
            "groups/{}",
            self.group.id
        )))
        .with_body(json!({
            "name": self.group.name,
            "lights": self.group.light_ids,
        }))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(self.group.clone())
    }
}

/// Delete a group
pub struct DeleteGroup {
    pub id: String,
}

impl BridgeCommand for DeleteGroup {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::delete(CommandPath::Authenticated(format!("groups/{}", self.id)))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}
