//! Fleet platform data models
//!
//! These mirror the backend's JSON schemas. Every optional field is lenient
//! (`#[serde(default)]`) because the backend owns the shape; only identifiers
//! are required.

mod driver;
mod invoice;
mod payment;
mod route;
mod transit;
mod trip;
mod user;
mod vehicle;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use driver::{Driver, DriverCreate, DriverFilter, DriverStatus};
pub use invoice::{Invoice, InvoiceCreate, InvoiceFilter, InvoiceItem, InvoiceStatus};
pub use payment::{Payment, PaymentCreate, PaymentFilter, PaymentStatus};
pub use route::{
    Location, OptimizationResult, RouteOptimizationRequest, RouteStop, Stop, VehicleRoute,
};
pub use transit::{PublicService, ServiceCreate, ServiceFilter, ServiceStatus, Ticket};
pub use trip::{DispatchRequest, Trip, TripCreate, TripFilter, TripStatus};
pub use user::{RoleUpdate, User, UserFilter, UserRole};
pub use vehicle::{Vehicle, VehicleCreate, VehicleFilter, VehicleStats, VehicleStatus};

/// Resource identifier; the backend uses integer keys for some resources and
/// UUID strings for others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) => Id::Num(n),
            Err(_) => Id::Text(s.to_string()),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// Status change body shared by every `PATCH /{resource}/{id}/status` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct StatusChange<S> {
    pub status: S,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Display status enums by their wire name.
macro_rules! wire_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    match serde_json::to_value(self) {
                        Ok(serde_json::Value::String(s)) => f.write_str(&s),
                        _ => f.write_str("unknown"),
                    }
                }
            }
        )+
    };
}

wire_display!(
    DriverStatus,
    InvoiceStatus,
    PaymentStatus,
    ServiceStatus,
    TripStatus,
    UserRole,
    VehicleStatus,
);

/// Push `key=value` when the value is present.
pub(crate) fn push_opt<T: fmt::Display>(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&T>,
) {
    if let Some(v) = value {
        params.push((key, v.to_string()));
    }
}
