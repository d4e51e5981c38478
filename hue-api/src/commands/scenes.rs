//! Scene commands

use serde::Deserialize;
use serde_json::{json, Value};

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::commands::{parse_resource_map, success_field};
use crate::error::{ApiError, Result};

/// A stored light scene
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "lights", default)]
    pub light_ids: Vec<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(rename = "lastupdated", default)]
    pub last_updated: Option<String>,
}

/// Retrieve all scenes
pub struct GetScenes;

impl BridgeCommand for GetScenes {
    type Output = Vec<Scene>;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("scenes".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let entries: Vec<(String, Scene)> = parse_resource_map(response)?;
        Ok(entries
            .into_iter()
            .map(|(id, mut scene)| {
                scene.id = id;
                scene
            })
            .collect())
    }
}

/// Retrieve one scene by id
pub struct GetScene {
    pub id: String,
}

impl BridgeCommand for GetScene {
    type Output = Scene;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated(format!("scenes/{}", self.id)))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let mut scene: Scene =
            serde_json::from_value(response).map_err(|e| ApiError::ParseError(e.to_string()))?;
        scene.id = self.id.clone();
        Ok(scene)
    }
}

/// Capture the given lights' current state as a scene
pub struct CreateScene {
    pub name: String,
    pub light_ids: Vec<String>,
}

impl BridgeCommand for CreateScene {
    type Output = Scene;

    fn request(&self) -> CommandRequest {
        CommandRequest::post(CommandPath::Authenticated("scenes".to_string())).with_body(json!({
            "name": self.name,
            "lights": self.light_ids,
        }))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let id = success_field(&response, "id")?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ApiError::ParseError("scene id is not a string".to_string()))?;

        Ok(Scene {
            id,
            name: self.name.clone(),
            light_ids: self.light_ids.clone(),
            owner: None,
            last_updated: None,
        })
    }
}

/// Delete a scene
pub struct DeleteScene {
    pub id: String,
}

impl BridgeCommand for DeleteScene {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::delete(CommandPath::Authenticated(format!("scenes/{}", self.id)))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_client::Method;

    #[test]
    fn test_get_scenes_parse() {
        let response = json!({
            "ab3f1c": {"name": "Relax", "lights": ["1", "2"], "owner": "abcdef"},
            "cd4e2d": {"name": "Focus", "lights": ["3"]}
        });

        let scenes = GetScenes.parse(response).unwrap();

        assert_eq!(scenes.len(), 2);
        // Non-numeric ids keep lexicographic order.
        assert_eq!(scenes[0].id, "ab3f1c");
        assert_eq!(scenes[0].name, "Relax");
    }

    #[test]
    fn test_create_scene_round_trip() {
        let command = CreateScene {
            name: "Movie".to_string(),
            light_ids: vec!["1".to_string()],
        };

        let request = command.request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body,
            Some(json!({"name": "Movie", "lights": ["1"]}))
        );

        let scene = command
            .parse(json!([{"success": {"id": "Ab3C9dEf01"}}]))
            .unwrap();
        assert_eq!(scene.id, "Ab3C9dEf01");
    }
}
