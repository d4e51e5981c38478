//! Time zone commands

use serde_json::Value;

use crate::command::{BridgeCommand, CommandPath, CommandRequest};
use crate::error::{ApiError, Result};

/// Retrieve the time zone names the bridge accepts
pub struct GetTimeZones;

impl BridgeCommand for GetTimeZones {
    type Output = Vec<String>;

    fn request(&self) -> CommandRequest {
        CommandRequest::get(CommandPath::Authenticated("info/timezones".to_string()))
    }

    fn parse(&self, response: Value) -> Result<Self::Output> {
        serde_json::from_value(response).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_time_zones_path() {
        let request = GetTimeZones.request();

        assert_eq!(
            request.path,
            CommandPath::Authenticated("info/timezones".to_string())
        );
    }

    #[test]
    fn test_get_time_zones_parse() {
        let response = json!(["Europe/Amsterdam", "America/New_York", "UTC"]);

        let zones = GetTimeZones.parse(response).unwrap();

        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0], "Europe/Amsterdam");
    }
}
