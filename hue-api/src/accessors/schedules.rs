//! Schedules accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::schedules::{
    CreateSchedule, DeleteSchedule, GetSchedule, GetSchedules, SaveSchedule, Schedule,
};
use crate::error::Result;

/// Operations on bridge schedules
pub struct Schedules {
    client: Client,
}

impl ResourceAccessor for Schedules {
    const NAME: &'static str = "schedules";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Schedules {
    pub async fn get_all(&self) -> Result<Vec<Schedule>> {
        self.client.invoke_command(GetSchedules).await
    }

    pub async fn get_by_id(&self, id: impl Into<String>) -> Result<Schedule> {
        self.client
            .invoke_command(GetSchedule { id: id.into() })
            .await
    }

    /// Store a new schedule; the returned value carries the assigned id
    pub async fn create(&self, schedule: Schedule) -> Result<Schedule> {
        self.client.invoke_command(CreateSchedule { schedule }).await
    }

    pub async fn save(&self, schedule: Schedule) -> Result<Schedule> {
        self.client.invoke_command(SaveSchedule { schedule }).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<()> {
        self.client
            .invoke_command(DeleteSchedule { id: id.into() })
            .await
    }
}
