//! Whitelist user commands

use serde::Deserialize;
use serde_json::{json, Value};

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::commands::success_field;
use crate::error::{ApiError, Result};

/// A whitelisted user of the bridge
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Whitelist key; also the credential used in authenticated paths
    #[serde(skip)]
    pub username: String,
    /// Application identifier supplied at creation time
    #[serde(rename = "name", default)]
    pub device_type: String,
    #[serde(rename = "create date", default)]
    pub created: Option<String>,
    #[serde(rename = "last use date", default)]
    pub last_used: Option<String>,
}

fn users_from_whitelist(response: &Value) -> Result<Vec<User>> {
    let whitelist = response
        .get("whitelist")
        .and_then(Value::as_object)
        .ok_or_else(|| ApiError::ParseError("missing whitelist in config".to_string()))?;

    let mut users = Vec::with_capacity(whitelist.len());
    for (username, attributes) in whitelist {
        let mut user: User = serde_json::from_value(attributes.clone())
            .map_err(|e| ApiError::ParseError(e.to_string()))?;
        user.username = username.clone();
        users.push(user);
    }

    Ok(users)
}

/// Register a new user with the bridge
///
/// Requires the bridge's link button to have been pressed within the last
/// 30 seconds; otherwise the bridge answers error type 101.
pub struct CreateUser {
    pub device_type: String,
}

impl BridgeCommand for CreateUser {
    type Output = User;

    fn request(&self) -> CommandRequest {
        CommandRequest::post(CommandPath::Unauthenticated(String::new()))
            .with_body(json!({"devicetype": self.device_type}))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        let username = success_field(&response, "username")?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ApiError::ParseError("username is not a string".to_string()))?;

        Ok(User {
            username,
            device_type: self.device_type.clone(),
            created: None,
            last_used: None,
        })
    }
}

/// Retrieve all whitelisted users
pub struct GetUsers;

impl BridgeCommand for GetUsers {
    type Output = Vec<User>;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("config".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        users_from_whitelist(&response)
    }
}

/// Retrieve one whitelisted user by username
pub struct GetUser {
    pub username: String,
}

impl BridgeCommand for GetUser {
    type Output = User;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("config".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        users_from_whitelist(&response)?
            .into_iter()
            .find(|user| user.username == self.username)
            .ok_or_else(|| ApiError::NotFound(format!("user {}", self.username)))
    }
}

/// Remove a user from the whitelist
pub struct DeleteUser {
    pub username: String,
}

impl BridgeCommand for DeleteUser {
    type Output = ();

    fn request(&self) -> CommandRequest {
        CommandRequest::delete(CommandPath::Authenticated(format!(
            "config/whitelist/{}",
            self.username
        )))
    }

    fn parse(&self, _response: Value) -> Result<Self::Output> {
        Ok(())
    }
}
