//! API trait definitions split by backend area
//!
//! Each trait covers one resource area of the fleet backend:
//! - [`VehicleApi`] - `/vehicles`
//! - [`DriverApi`] - `/fleet/drivers`
//! - [`InvoiceApi`] - `/payments/invoices`
//! - [`PaymentApi`] - `/payments`
//! - [`TripApi`] - `/trips`
//! - [`RouteApi`] - `/route-optimization`
//! - [`TransitApi`] - `/services`
//! - [`AdminApi`] - `/admin`
//!
//! The [`FleetApi`](super::FleetApi) super-trait combines all of them.

mod admin;
mod driver;
mod invoice;
mod payment;
mod route;
mod transit;
mod trip;
mod vehicle;

pub use admin::AdminApi;
pub use driver::DriverApi;
pub use invoice::InvoiceApi;
pub use payment::PaymentApi;
pub use route::RouteApi;
pub use transit::TransitApi;
pub use trip::TripApi;
pub use vehicle::VehicleApi;
