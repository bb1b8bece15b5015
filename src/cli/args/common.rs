//! Common CLI types shared across commands

use serde::de::DeserializeOwned;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Parse a `preferences.format` value from the config file
    pub fn from_preference(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a status or role argument by its wire name (`in_use`, `off-duty`, ...).
///
/// Values the backend would not recognise are rejected instead of being sent
/// as the catch-all variant.
pub fn parse_wire<T>(value: &str) -> Result<T, String>
where
    T: DeserializeOwned + Default + PartialEq,
{
    let wire = value.trim().to_ascii_lowercase().replace('-', "_");
    match serde_json::from_value::<T>(serde_json::Value::String(wire)) {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(format!("unknown value '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{TripStatus, UserRole, VehicleStatus};

    #[test]
    fn test_parse_wire_accepts_dashes() {
        assert_eq!(parse_wire::<VehicleStatus>("in-use"), Ok(VehicleStatus::InUse));
        assert_eq!(parse_wire::<TripStatus>("IN_PROGRESS"), Ok(TripStatus::InProgress));
        assert_eq!(parse_wire::<UserRole>("fleet-manager"), Ok(UserRole::FleetManager));
    }

    #[test]
    fn test_parse_wire_rejects_unknown() {
        assert!(parse_wire::<VehicleStatus>("teleporting").is_err());
        assert!(parse_wire::<VehicleStatus>("unknown").is_err());
    }

    #[test]
    fn test_format_preference() {
        assert_eq!(OutputFormat::from_preference("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_preference("pretty"), None);
    }
}
