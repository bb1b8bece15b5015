//! Vehicle models

use serde::{Deserialize, Serialize};

use super::{Id, push_opt};

/// Vehicle lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
    OutOfService,
    Retired,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Fleet vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Id,

    #[serde(default)]
    pub license_plate: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// bus, van, truck, sedan...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,

    /// Seats or payload units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,

    #[serde(default)]
    pub status: VehicleStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Vehicle {
    /// "Make Model (Year)" or whatever parts are known
    pub fn description(&self) -> String {
        let mut parts: Vec<String> = [self.make.clone(), self.model.clone()]
            .into_iter()
            .flatten()
            .collect();
        if let Some(year) = self.year {
            parts.push(format!("({})", year));
        }
        parts.join(" ")
    }
}

/// Body for `POST /vehicles` and `PUT /vehicles/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleCreate {
    pub license_plate: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

/// Fleet-wide counters from `GET /vehicles/stats`.
///
/// The payload is kept exactly as received, whatever its shape, and
/// serializes back unchanged. Known counters are read through accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleStats(pub serde_json::Value);

impl VehicleStats {
    pub fn total_vehicles(&self) -> Option<u64> {
        self.count("total_vehicles")
    }

    pub fn available_vehicles(&self) -> Option<u64> {
        self.count("available_vehicles")
    }

    pub fn in_use_vehicles(&self) -> Option<u64> {
        self.count("in_use_vehicles")
    }

    pub fn maintenance_vehicles(&self) -> Option<u64> {
        self.count("maintenance_vehicles")
    }

    /// Every top-level field; empty when the payload is not an object
    pub fn fields(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.as_object().into_iter().flatten()
    }

    /// A non-negative whole number, whether sent as an integer or a float
    fn count(&self, key: &str) -> Option<u64> {
        let value = self.0.get(key)?;
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
                .map(|n| n as u64)
        })
    }
}

/// Filters for `GET /vehicles`
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub status: Option<VehicleStatus>,
    pub vehicle_type: Option<String>,
    pub search: Option<String>,
}

impl VehicleFilter {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "status", self.status.as_ref());
        push_opt(&mut params, "vehicle_type", self.vehicle_type.as_ref());
        push_opt(&mut params, "search", self.search.as_ref());
        params
    }
}
