//! Vehicle and driver display models

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::{Driver, Vehicle};

/// Vehicle display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct VehicleDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "PLATE")]
    pub license_plate: String,

    /// Make, model and year
    #[tabled(rename = "VEHICLE")]
    pub description: String,

    #[tabled(rename = "TYPE")]
    pub vehicle_type: String,

    #[tabled(rename = "CAPACITY")]
    pub capacity: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Vehicle> for VehicleDisplay {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            description: vehicle.description(),
            license_plate: vehicle.license_plate,
            vehicle_type: or_dash(vehicle.vehicle_type),
            capacity: or_dash(vehicle.capacity),
            status: vehicle.status.to_string(),
        }
    }
}

/// Driver display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DriverDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "LICENSE")]
    pub license_number: String,

    /// Currently assigned vehicle
    #[tabled(rename = "VEHICLE")]
    pub assigned_vehicle: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Driver> for DriverDisplay {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id.to_string(),
            name: driver.full_name(),
            phone: or_dash(driver.phone),
            license_number: or_dash(driver.license_number),
            assigned_vehicle: or_dash(driver.assigned_vehicle_id),
            status: driver.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vehicle_display_fills_gaps() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "id": 4, "license_plate": "KCB 221L", "make": "Isuzu", "status": "in_use"
        }))
        .unwrap();

        let row = VehicleDisplay::from(vehicle);
        assert_eq!(row.id, "4");
        assert_eq!(row.description, "Isuzu");
        assert_eq!(row.vehicle_type, "-");
        assert_eq!(row.status, "in_use");
    }

    #[test]
    fn test_driver_display() {
        let driver: Driver = serde_json::from_value(json!({
            "id": "d-2", "first_name": "Otieno", "last_name": "Ouma",
            "assigned_vehicle_id": 7, "status": "on_trip"
        }))
        .unwrap();

        let row = DriverDisplay::from(driver);
        assert_eq!(row.name, "Otieno Ouma");
        assert_eq!(row.assigned_vehicle, "7");
        assert_eq!(row.phone, "-");
    }
}
