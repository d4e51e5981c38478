//! Sensors accessor

use crate::client::{Client, ResourceAccessor};
use crate::commands::sensors::{DeleteSensor, GetSensor, GetSensors, Sensor, SetSensorName};
use crate::error::Result;

/// Operations on paired sensors
pub struct Sensors {
    client: Client,
}

impl ResourceAccessor for Sensors {
    const NAME: &'static str = "sensors";

    fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Sensors {
    pub async fn get_all(&self) -> Result<Vec<Sensor>> {
        self.client.invoke_command(GetSensors).await
    }

    pub async fn get_by_id(&self, id: impl Into<String>) -> Result<Sensor> {
        self.client
            .invoke_command(GetSensor { id: id.into() })
            .await
    }

    pub async fn set_name(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<()> {
        self.client
            .invoke_command(SetSensorName {
                id: id.into(),
                name: name.into(),
            })
            .await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<()> {
        self.client
            .invoke_command(DeleteSensor { id: id.into() })
            .await
    }
}
