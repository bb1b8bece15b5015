//! Invoice API trait

use async_trait::async_trait;

use crate::client::models::{Invoice, InvoiceCreate, InvoiceFilter};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Invoicing operations.
///
/// Totals, numbering and PDF rendering happen server-side; the client only
/// submits line items and triggers transitions.
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    async fn list_invoices(
        &self,
        filter: &InvoiceFilter,
        pagination: Option<&PaginationParams>,
    ) -> Result<Vec<Invoice>>;

    async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice>;

    async fn create_invoice(&self, request: &InvoiceCreate) -> Result<Invoice>;

    /// Email the invoice to the customer (draft -> sent)
    async fn send_invoice(&self, invoice_id: &str) -> Result<Invoice>;

    async fn cancel_invoice(&self, invoice_id: &str) -> Result<Invoice>;
}
