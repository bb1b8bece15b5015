//! Driver API trait

use async_trait::async_trait;

use crate::client::models::{Driver, DriverCreate, DriverFilter, DriverStatus, StatusChange};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Driver roster operations
#[async_trait]
pub trait DriverApi: Send + Sync {
    async fn list_drivers(
        &self,
        filter: &DriverFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Driver>>;

    async fn get_driver(&self, driver_id: &str) -> Result<Driver>;

    async fn create_driver(&self, request: &DriverCreate) -> Result<Driver>;

    async fn update_driver(&self, driver_id: &str, request: &DriverCreate) -> Result<Driver>;

    async fn delete_driver(&self, driver_id: &str) -> Result<()>;

    /// Change availability (available, off duty, suspended...)
    async fn set_driver_status(
        &self,
        driver_id: &str,
        change: &StatusChange<DriverStatus>,
    ) -> Result<Driver>;
}
