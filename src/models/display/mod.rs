//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod billing;
mod common;
mod transit;
mod trip;
mod user;
mod vehicle;

// Re-export all display types used by CLI commands
pub use billing::{InvoiceDisplay, PaymentDisplay};
pub use transit::{ServiceDisplay, TicketDisplay};
pub use trip::{OptimizationDisplay, RouteStopDisplay, TripDisplay};
pub use user::UserDisplay;
pub use vehicle::{DriverDisplay, VehicleDisplay};
