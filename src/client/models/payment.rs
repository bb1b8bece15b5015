//! Payment models

use serde::{Deserialize, Serialize};

use super::{Id, push_opt};

/// Payment settlement state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Payment recorded against an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Id,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Id>,

    #[serde(default)]
    pub amount: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// cash, card, mobile_money, bank_transfer...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default)]
    pub status: PaymentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
}

/// Body for `POST /payments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub invoice_id: Id,

    pub amount: f64,

    pub method: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Filters for `GET /payments`
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub invoice_id: Option<Id>,
    pub status: Option<PaymentStatus>,
}

impl PaymentFilter {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "invoice_id", self.invoice_id.as_ref());
        push_opt(&mut params, "status", self.status.as_ref());
        params
    }
}
