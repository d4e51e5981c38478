//! Scenes accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::scenes::{CreateScene, DeleteScene, GetScene, GetScenes, Scene};
use crate::error::Result;

/// Operations on stored scenes
pub struct Scenes {
    client: Client,
}

impl ResourceAccessor for Scenes {
    const NAME: &'static str = "scenes";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Scenes {
    pub async fn get_all(&self) -> Result<Vec<Scene>> {
        self.client.invoke_command(GetScenes).await
    }

    pub async fn get_by_id(&self, id: impl Into<String>) -> Result<Scene> {
        self.client.invoke_command(GetScene { id: id.into() }).await
    }

    /// Capture the given lights' current state as a scene
    pub async fn create(
        &self,
        name: impl Into<String>,
        light_ids: Vec<String>,
    ) -> Result<Scene> {
        self.client
            .invoke_command(CreateScene {
                name: name.into(),
                light_ids,
            })
            .await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<()> {
        self.client
            .invoke_command(DeleteScene { id: id.into() })
            .await
    }
}
