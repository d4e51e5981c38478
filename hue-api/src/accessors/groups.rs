//! Groups accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::groups::{
    CreateGroup, DeleteGroup, GetGroup, GetGroups, Group, SaveGroup,
};
use crate::error::Result;

/// Operations on light groups
pub struct Groups {
    client: Client,
}

impl ResourceAccessor for Groups {
    const NAME: &'static str = "groups";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Groups {
    pub async fn get_all(&self) -> Result<Vec<Group>> {
        self.client.invoke_command(GetGroups).await
    }

    pub async fn get_by_id(&self, id: impl Into<String>) -> Result<Group> {
        self.client.invoke_command(GetGroup { id: id.into() }).await
    }

    /// Create a group over the given lights
    pub async fn create(
        &self,
        name: impl Into<String>,
        light_ids: Vec<String>,
    ) -> Result<Group> {
        self.client
            .invoke_command(CreateGroup {
                name: name.into(),
                light_ids,
            })
            .await
    }

    /// Persist a group's name and membership
    pub async fn save(&self, group: Group) -> Result<Group> {
        self.client.invoke_command(SaveGroup { group }).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<()> {
        self.client
            .invoke_command(DeleteGroup { id: id.into() })
            .await
    }
}
