//! Trip API trait

use async_trait::async_trait;

use crate::client::models::{
    DispatchRequest, StatusChange, Trip, TripCreate, TripFilter, TripStatus,
};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Trip and dispatch operations
#[async_trait]
pub trait TripApi: Send + Sync {
    async fn list_trips(
        &self,
        filter: &TripFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Trip>>;

    async fn get_trip(&self, trip_id: &str) -> Result<Trip>;

    async fn create_trip(&self, request: &TripCreate) -> Result<Trip>;

    async fn set_trip_status(
        &self,
        trip_id: &str,
        change: &StatusChange<TripStatus>,
    ) -> Result<Trip>;

    /// Assign a driver and vehicle to a scheduled trip
    async fn dispatch_trip(&self, trip_id: &str, request: &DispatchRequest) -> Result<Trip>;
}
