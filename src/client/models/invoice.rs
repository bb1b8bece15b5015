//! Invoice models

use serde::{Deserialize, Serialize};

use super::{Id, push_opt};

/// Invoice state; transitions are decided by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    PartiallyPaid,
    Paid,
    Overdue,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Id,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,

    #[serde(default)]
    pub total_amount: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default)]
    pub status: InvoiceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Invoice number if issued, otherwise the raw id
    pub fn reference(&self) -> String {
        self.invoice_number
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Unpaid invoices the customer still owes on
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            InvoiceStatus::Sent | InvoiceStatus::PartiallyPaid | InvoiceStatus::Overdue
        )
    }
}

/// Invoice line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,

    #[serde(default = "one")]
    pub quantity: f64,

    pub unit_price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

fn one() -> f64 {
    1.0
}

/// Body for `POST /payments/invoices`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceCreate {
    pub customer_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Id>,

    pub items: Vec<InvoiceItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Filters for `GET /payments/invoices`
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub status: Option<InvoiceStatus>,
    pub customer: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl InvoiceFilter {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "status", self.status.as_ref());
        push_opt(&mut params, "customer", self.customer.as_ref());
        push_opt(&mut params, "date_from", self.date_from.as_ref());
        push_opt(&mut params, "date_to", self.date_to.as_ref());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_prefers_invoice_number() {
        let invoice: Invoice =
            serde_json::from_str(r#"{"id": 9, "invoice_number": "INV-2024-0009"}"#).unwrap();
        assert_eq!(invoice.reference(), "INV-2024-0009");

        let invoice: Invoice = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(invoice.reference(), "9");
    }

    #[test]
    fn test_is_open() {
        let invoice: Invoice =
            serde_json::from_str(r#"{"id": 1, "status": "overdue", "total_amount": 120.5}"#)
                .unwrap();
        assert!(invoice.is_open());

        let invoice: Invoice = serde_json::from_str(r#"{"id": 1, "status": "paid"}"#).unwrap();
        assert!(!invoice.is_open());
    }

    #[test]
    fn test_item_quantity_defaults_to_one() {
        let item: InvoiceItem =
            serde_json::from_str(r#"{"description": "Airport transfer", "unit_price": 45.0}"#)
                .unwrap();
        assert_eq!(item.quantity, 1.0);
    }
}
