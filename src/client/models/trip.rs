//! Trip and dispatch models

use serde::{Deserialize, Serialize};

use super::{Id, push_opt};

/// Trip progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Scheduled,
    Dispatched,
    InProgress,
    Completed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Id,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<Id>,

    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_departure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_departure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_arrival: Option<String>,

    #[serde(default)]
    pub status: TripStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<u32>,
}

/// Body for `POST /trips`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripCreate {
    pub origin: String,

    pub destination: String,

    pub scheduled_departure: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for `POST /trips/{id}/dispatch`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub driver_id: Id,
    pub vehicle_id: Id,
}

/// Filters for `GET /trips`
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    pub status: Option<TripStatus>,
    pub driver_id: Option<Id>,
    pub vehicle_id: Option<Id>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl TripFilter {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "status", self.status.as_ref());
        push_opt(&mut params, "driver_id", self.driver_id.as_ref());
        push_opt(&mut params, "vehicle_id", self.vehicle_id.as_ref());
        push_opt(&mut params, "date_from", self.date_from.as_ref());
        push_opt(&mut params, "date_to", self.date_to.as_ref());
        params
    }
}
