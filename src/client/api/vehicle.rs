//! Vehicle API trait

use async_trait::async_trait;

use crate::client::models::{
    StatusChange, Vehicle, VehicleCreate, VehicleFilter, VehicleStats, VehicleStatus,
};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Vehicle operations
#[async_trait]
pub trait VehicleApi: Send + Sync {
    /// List vehicles matching the filter
    async fn list_vehicles(
        &self,
        filter: &VehicleFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Vehicle>>;

    async fn get_vehicle(&self, vehicle_id: &str) -> Result<Vehicle>;

    async fn create_vehicle(&self, request: &VehicleCreate) -> Result<Vehicle>;

    /// Replace a vehicle's details
    async fn update_vehicle(&self, vehicle_id: &str, request: &VehicleCreate) -> Result<Vehicle>;

    async fn delete_vehicle(&self, vehicle_id: &str) -> Result<()>;

    /// Move a vehicle to another lifecycle status
    async fn set_vehicle_status(
        &self,
        vehicle_id: &str,
        change: &StatusChange<VehicleStatus>,
    ) -> Result<Vehicle>;

    /// Fleet-wide counters.
    ///
    /// Implementations may serve a result up to five minutes old.
    async fn vehicle_stats(&self) -> Result<VehicleStats>;
}
