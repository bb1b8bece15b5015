//! Trip and route optimization display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{opt_datetime, or_dash};
use crate::client::models::{OptimizationResult, Trip};

/// Trip display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TripDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "FROM")]
    pub origin: String,

    #[tabled(rename = "TO")]
    pub destination: String,

    #[tabled(rename = "DEPARTURE")]
    pub scheduled_departure: String,

    #[tabled(rename = "DRIVER")]
    pub driver_id: String,

    #[tabled(rename = "VEHICLE")]
    pub vehicle_id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Trip> for TripDisplay {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            origin: trip.origin,
            destination: trip.destination,
            scheduled_departure: opt_datetime(trip.scheduled_departure.as_deref()),
            driver_id: or_dash(trip.driver_id),
            vehicle_id: or_dash(trip.vehicle_id),
            status: trip.status.to_string(),
        }
    }
}

/// Optimization run summary
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OptimizationDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Number of vehicle routes produced
    #[tabled(rename = "ROUTES")]
    pub routes: usize,

    #[tabled(rename = "DISTANCE KM")]
    pub distance_km: String,

    #[tabled(rename = "DURATION MIN")]
    pub duration_minutes: String,

    #[tabled(rename = "UNASSIGNED")]
    pub unassigned: usize,
}

impl From<OptimizationResult> for OptimizationDisplay {
    fn from(result: OptimizationResult) -> Self {
        Self {
            id: result.id.to_string(),
            status: or_dash(result.status),
            routes: result.routes.len(),
            distance_km: or_dash(result.total_distance_km.map(|d| format!("{:.1}", d))),
            duration_minutes: or_dash(result.total_duration_minutes.map(|d| format!("{:.0}", d))),
            unassigned: result.unassigned_stops.len(),
        }
    }
}

/// One stop of an optimized route, flattened across vehicles
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RouteStopDisplay {
    #[tabled(rename = "VEHICLE")]
    pub vehicle_id: String,

    #[tabled(rename = "SEQ")]
    pub sequence: u32,

    #[tabled(rename = "STOP")]
    pub stop_id: String,

    #[tabled(rename = "ARRIVAL")]
    pub arrival_time: String,
}

impl RouteStopDisplay {
    /// One row per stop, in route order
    pub fn rows(result: &OptimizationResult) -> Vec<Self> {
        result
            .routes
            .iter()
            .flat_map(|route| {
                route.stops.iter().map(move |stop| Self {
                    vehicle_id: route.vehicle_id.to_string(),
                    sequence: stop.sequence,
                    stop_id: or_dash(stop.stop_id.as_ref()),
                    arrival_time: opt_datetime(stop.arrival_time.as_deref()),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trip_display() {
        let trip: Trip = serde_json::from_value(json!({
            "id": 88, "origin": "Depot", "destination": "JKIA",
            "scheduled_departure": "2026-10-20T05:45:00", "status": "scheduled"
        }))
        .unwrap();

        let row = TripDisplay::from(trip);
        assert_eq!(row.scheduled_departure, "2026-10-20 05:45");
        assert_eq!(row.driver_id, "-");
    }

    #[test]
    fn test_route_stop_rows_flatten_routes() {
        let result: OptimizationResult = serde_json::from_value(json!({
            "id": "run-1",
            "routes": [
                { "vehicle_id": 1, "stops": [{ "sequence": 1, "stop_id": "a" }, { "sequence": 2 }] },
                { "vehicle_id": 2, "stops": [{ "sequence": 1, "stop_id": "c" }] }
            ]
        }))
        .unwrap();

        let rows = RouteStopDisplay::rows(&result);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].stop_id, "-");
        assert_eq!(rows[2].vehicle_id, "2");

        let summary = OptimizationDisplay::from(result);
        assert_eq!(summary.routes, 2);
        assert_eq!(summary.distance_km, "-");
    }
}
