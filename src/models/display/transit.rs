//! Public transport service and ticket display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{opt_datetime, or_dash};
use crate::client::models::{PublicService, Ticket};

/// Service display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ServiceDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROUTE")]
    pub route: String,

    #[tabled(rename = "DEPARTS")]
    pub departure_time: String,

    /// Booked seats over capacity
    #[tabled(rename = "BOOKED")]
    pub occupancy: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<PublicService> for ServiceDisplay {
    fn from(service: PublicService) -> Self {
        Self {
            id: service.id.to_string(),
            occupancy: or_dash(service.occupancy()),
            route: format!("{} → {}", service.origin, service.destination),
            departure_time: opt_datetime(service.departure_time.as_deref()),
            name: service.name,
            status: service.status.to_string(),
        }
    }
}

/// Ticket display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TicketDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "PASSENGER")]
    pub passenger_name: String,

    #[tabled(rename = "SEAT")]
    pub seat_number: String,

    #[tabled(rename = "FARE")]
    pub fare: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Ticket> for TicketDisplay {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id.to_string(),
            passenger_name: ticket.passenger_name,
            seat_number: or_dash(ticket.seat_number),
            fare: or_dash(ticket.fare.map(|f| format!("{:.2}", f))),
            status: or_dash(ticket.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_display_route_and_occupancy() {
        let service: PublicService = serde_json::from_value(json!({
            "id": 4, "name": "Express 1", "origin": "Nairobi", "destination": "Nakuru",
            "capacity": 33, "available_seats": 8, "status": "scheduled"
        }))
        .unwrap();

        let row = ServiceDisplay::from(service);
        assert_eq!(row.route, "Nairobi → Nakuru");
        assert_eq!(row.occupancy, "25/33");
        assert_eq!(row.departure_time, "-");
    }
}
