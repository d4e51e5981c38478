//! Time zones accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::time_zones::GetTimeZones;
use crate::error::Result;

/// Read-only access to the bridge's supported time zones
pub struct TimeZones {
    client: Client,
}

impl ResourceAccessor for TimeZones {
    const NAME: &'static str = "timeZones";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl TimeZones {
    pub async fn get_all(&self) -> Result<Vec<String>> {
        self.client.invoke_command(GetTimeZones).await
    }
}
