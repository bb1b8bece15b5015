//! Driver models

use serde::{Deserialize, Serialize};

use super::{Id, push_opt};

/// Driver availability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Available,
    OnTrip,
    OffDuty,
    OnLeave,
    Suspended,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Fleet driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Id,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,

    /// ISO date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<String>,

    #[serde(default)]
    pub status: DriverStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_vehicle_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body for `POST /fleet/drivers` and `PUT /fleet/drivers/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriverCreate {
    pub first_name: String,

    pub last_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<String>,
}

/// Filters for `GET /fleet/drivers`
#[derive(Debug, Clone, Default)]
pub struct DriverFilter {
    pub status: Option<DriverStatus>,
    pub search: Option<String>,
}

impl DriverFilter {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "status", self.status.as_ref());
        push_opt(&mut params, "search", self.search.as_ref());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_missing_parts() {
        let driver: Driver =
            serde_json::from_str(r#"{"id": "d-1", "first_name": "Amina"}"#).unwrap();
        assert_eq!(driver.full_name(), "Amina");
    }

    #[test]
    fn test_create_skips_empty_optionals() {
        let body = DriverCreate {
            first_name: "Amina".to_string(),
            last_name: "Otieno".to_string(),
            license_number: Some("DL-998".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "first_name": "Amina",
                "last_name": "Otieno",
                "license_number": "DL-998"
            })
        );
    }
}
