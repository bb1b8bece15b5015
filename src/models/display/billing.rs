//! Invoice and payment display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{money, opt_datetime, or_dash};
use crate::client::models::{Invoice, Payment};

/// Invoice display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InvoiceDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    /// Invoice number, or the ID for drafts without one
    #[tabled(rename = "INVOICE")]
    pub reference: String,

    #[tabled(rename = "CUSTOMER")]
    pub customer: String,

    #[tabled(rename = "TOTAL")]
    pub total: String,

    #[tabled(rename = "DUE")]
    pub due_date: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Invoice> for InvoiceDisplay {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            reference: invoice.reference(),
            customer: or_dash(invoice.customer_name),
            total: money(invoice.total_amount, invoice.currency.as_deref()),
            due_date: opt_datetime(invoice.due_date.as_deref()),
            status: invoice.status.to_string(),
        }
    }
}

/// Payment display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PaymentDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "INVOICE")]
    pub invoice_id: String,

    #[tabled(rename = "AMOUNT")]
    pub amount: String,

    #[tabled(rename = "METHOD")]
    pub method: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "PAID AT")]
    pub paid_at: String,
}

impl From<Payment> for PaymentDisplay {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.to_string(),
            invoice_id: or_dash(payment.invoice_id),
            amount: money(payment.amount, payment.currency.as_deref()),
            method: or_dash(payment.method),
            status: payment.status.to_string(),
            paid_at: opt_datetime(payment.paid_at.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoice_display_formats_total() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": 2, "invoice_number": "INV-7", "total_amount": 1500.0, "currency": "KES",
            "status": "partially_paid", "due_date": "2026-11-30"
        }))
        .unwrap();

        let row = InvoiceDisplay::from(invoice);
        assert_eq!(row.reference, "INV-7");
        assert_eq!(row.total, "1500.00 KES");
        assert_eq!(row.due_date, "2026-11-30");
        assert_eq!(row.status, "partially_paid");
    }

    #[test]
    fn test_payment_display() {
        let payment: Payment = serde_json::from_value(json!({
            "id": 31, "invoice_id": 2, "amount": 700.0, "method": "mobile_money",
            "status": "completed", "paid_at": "2026-10-02T09:15:00Z"
        }))
        .unwrap();

        let row = PaymentDisplay::from(payment);
        assert_eq!(row.invoice_id, "2");
        assert_eq!(row.amount, "700.00");
        assert_eq!(row.paid_at, "2026-10-02 09:15");
    }
}
