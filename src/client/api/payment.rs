//! Payment API trait

use async_trait::async_trait;

use crate::client::models::{Payment, PaymentCreate, PaymentFilter};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn list_payments(
        &self,
        filter: &PaymentFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Payment>>;

    async fn get_payment(&self, payment_id: &str) -> Result<Payment>;

    /// Record a payment received against an invoice
    async fn record_payment(&self, request: &PaymentCreate) -> Result<Payment>;
}
