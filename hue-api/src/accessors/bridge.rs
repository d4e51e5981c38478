//! Bridge settings accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::bridge::{
    BridgeConfig, GetBridge, IsAuthenticated, LinkButton, Ping, SaveBridge, Touchlink,
};
use crate::error::Result;

/// Operations on the bridge itself
pub struct Bridge {
    client: Client,
}

impl ResourceAccessor for Bridge {
    const NAME: &'static str = "bridge";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Bridge {
    /// Check the bridge is reachable, without credentials
    pub async fn ping(&self) -> Result<()> {
        self.client.invoke_command(Ping).await
    }

    /// Check the configured username is accepted by the bridge
    pub async fn is_authenticated(&self) -> Result<()> {
        self.client.invoke_command(IsAuthenticated).await
    }

    /// Retrieve the bridge settings
    pub async fn get(&self) -> Result<BridgeConfig> {
        self.client.invoke_command(GetBridge).await
    }

    /// Persist the writable bridge settings
    pub async fn save(&self, bridge: BridgeConfig) -> Result<BridgeConfig> {
        self.client.invoke_command(SaveBridge { bridge }).await
    }

    /// Enable the link button, allowing new users to register
    pub async fn link_button(&self) -> Result<()> {
        self.client.invoke_command(LinkButton).await
    }

    /// Start a touchlink scan for nearby lights
    pub async fn touchlink(&self) -> Result<()> {
        self.client.invoke_command(Touchlink).await
    }
}
