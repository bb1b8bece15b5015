//! Public transit service and ticket models

use serde::{Deserialize, Serialize};

use super::{Id, push_opt};

/// Scheduled service state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Scheduled,
    Active,
    Suspended,
    Completed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Public transit service (a scheduled departure on a route)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicService {
    pub id: Id,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_code: Option<String>,

    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,

    #[serde(default)]
    pub status: ServiceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<Id>,
}

impl PublicService {
    /// "booked/capacity" when both are known
    pub fn occupancy(&self) -> Option<String> {
        let capacity = self.capacity?;
        let available = self.available_seats?;
        Some(format!(
            "{}/{}",
            capacity.saturating_sub(available),
            capacity
        ))
    }
}

/// Body for `POST /services` and `PUT /services/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,

    pub origin: String,

    pub destination: String,

    pub departure_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<Id>,
}

/// Passenger ticket on a service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Id,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<Id>,

    #[serde(default)]
    pub passenger_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_at: Option<String>,
}

/// Filters for `GET /services`
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub status: Option<ServiceStatus>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
}

impl ServiceFilter {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "status", self.status.as_ref());
        push_opt(&mut params, "origin", self.origin.as_ref());
        push_opt(&mut params, "destination", self.destination.as_ref());
        push_opt(&mut params, "date", self.date.as_ref());
        params
    }
}
