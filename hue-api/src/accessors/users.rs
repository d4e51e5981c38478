//! Whitelist users accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::users::{CreateUser, DeleteUser, GetUser, GetUsers, User};
use crate::error::{ApiError, Result};

/// Operations on the bridge's user whitelist
pub struct Users {
    client: Client,
}

impl ResourceAccessor for Users {
    const NAME: &'static str = "users";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Users {
    /// Register a new user; the link button must have been pressed
    pub async fn create(&self, device_type: impl Into<String>) -> Result<User> {
        self.client
            .invoke_command(CreateUser {
                device_type: device_type.into(),
            })
            .await
    }

    /// Retrieve the user this client is configured as
    pub async fn get(&self) -> Result<User> {
        let username = self.client.username().ok_or(ApiError::Unauthenticated)?;
        self.client.invoke_command(GetUser { username }).await
    }

    /// Retrieve a user by username
    pub async fn get_by_username(&self, username: impl Into<String>) -> Result<User> {
        self.client
            .invoke_command(GetUser {
                username: username.into(),
            })
            .await
    }

    /// Retrieve all whitelisted users
    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.client.invoke_command(GetUsers).await
    }

    /// Remove a user from the whitelist
    pub async fn delete(&self, username: impl Into<String>) -> Result<()> {
        self.client
            .invoke_command(DeleteUser {
                username: username.into(),
            })
            .await
    }
}
