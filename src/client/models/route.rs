//! Route optimization models

use serde::{Deserialize, Serialize};

use super::Id;

/// Geographic point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,

    pub longitude: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Stop to be visited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    pub location: Location,

    /// Load picked up or dropped at this stop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window_end: Option<String>,
}

/// Body for `POST /route-optimization/optimize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOptimizationRequest {
    pub vehicle_ids: Vec<Id>,

    pub stops: Vec<Stop>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depot: Option<Location>,

    /// distance, time or cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
}

/// Outcome of an optimization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub id: Id,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance_km: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration_minutes: Option<f64>,

    #[serde(default)]
    pub routes: Vec<VehicleRoute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unassigned_stops: Vec<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Ordered stops assigned to one vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRoute {
    pub vehicle_id: Id,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,

    #[serde(default)]
    pub stops: Vec<RouteStop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_id: Option<Id>,

    pub sequence: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_file_format() {
        let request: RouteOptimizationRequest = serde_json::from_str(
            r#"{
                "vehicle_ids": [1, 2],
                "depot": { "latitude": -1.2921, "longitude": 36.8219 },
                "stops": [
                    { "id": "s1", "location": { "latitude": -1.3, "longitude": 36.8 }, "demand": 2 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.vehicle_ids.len(), 2);
        assert_eq!(request.stops[0].demand, Some(2.0));
        assert!(request.objective.is_none());
    }

    #[test]
    fn test_result_with_routes() {
        let result: OptimizationResult = serde_json::from_str(
            r#"{
                "id": "opt-1",
                "status": "completed",
                "total_distance_km": 42.5,
                "routes": [
                    { "vehicle_id": 1, "stops": [ { "stop_id": "s1", "sequence": 1 } ] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(result.routes.len(), 1);
        assert_eq!(result.routes[0].stops[0].sequence, 1);
        assert!(result.unassigned_stops.is_empty());
    }
}
