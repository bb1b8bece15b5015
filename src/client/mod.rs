//! Fleet backend API client

pub mod api;
pub mod envelope;
pub mod fleet;
pub mod models;
pub mod pagination;

pub use api::{
    AdminApi, DriverApi, InvoiceApi, PaymentApi, RouteApi, TransitApi, TripApi, VehicleApi,
};
pub use fleet::FleetClient;
pub use pagination::PaginationParams;

/// Every backend area behind one bound, for code that takes any client.
pub trait FleetApi:
    VehicleApi + DriverApi + InvoiceApi + PaymentApi + TripApi + RouteApi + TransitApi + AdminApi
{
}

impl<T> FleetApi for T where
    T: VehicleApi
        + DriverApi
        + InvoiceApi
        + PaymentApi
        + TripApi
        + RouteApi
        + TransitApi
        + AdminApi
{
}
