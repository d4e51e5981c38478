//! Lights accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::lights::{
    DeleteLight, GetLight, GetLights, Light, SetLightName, SetLightState,
};
use crate::error::Result;

/// Operations on the bridge's lights
pub struct Lights {
    client: Client,
}

impl ResourceAccessor for Lights {
    const NAME: &'static str = "lights";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Lights {
    /// Retrieve all lights
    pub async fn get_all(&self) -> Result<Vec<Light>> {
        self.client.invoke_command(GetLights).await
    }

    /// Retrieve one light by id
    pub async fn get_by_id(&self, id: impl Into<String>) -> Result<Light> {
        self.client.invoke_command(GetLight { id: id.into() }).await
    }

    /// Persist a light's name and desired state
    ///
    /// Attributes and state live on separate resources, so this issues two
    /// commands in order.
    pub async fn save(&self, light: &Light) -> Result<()> {
        self.client
            .invoke_command(SetLightName {
                id: light.id.clone(),
                name: light.name.clone(),
            })
            .await?;
        self.client
            .invoke_command(SetLightState {
                id: light.id.clone(),
                state: light.state.clone(),
            })
            .await
    }

    /// Unpair a light from the bridge
    pub async fn delete(&self, id: impl Into<String>) -> Result<()> {
        self.client
            .invoke_command(DeleteLight { id: id.into() })
            .await
    }
}
