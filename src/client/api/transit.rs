//! Public transit service API trait

use async_trait::async_trait;

use crate::client::models::{PublicService, ServiceCreate, ServiceFilter, Ticket};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Scheduled public services and their tickets
#[async_trait]
pub trait TransitApi: Send + Sync {
    async fn list_services(
        &self,
        filter: &ServiceFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<PublicService>>;

    async fn get_service(&self, service_id: &str) -> Result<PublicService>;

    async fn create_service(&self, request: &ServiceCreate) -> Result<PublicService>;

    async fn update_service(
        &self,
        service_id: &str,
        request: &ServiceCreate,
    ) -> Result<PublicService>;

    /// Tickets sold on a service
    async fn list_service_tickets(
        &self,
        service_id: &str,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Ticket>>;
}
