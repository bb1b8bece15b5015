//! Public transport service commands

use clap::Args;

use crate::cli::ServiceCommands;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_show_command};
use crate::client::TransitApi;
use crate::client::models::{Id, PublicService, ServiceCreate, ServiceFilter, Ticket};
use crate::error::Result;
use crate::models::{ServiceDisplay, TicketDisplay};

/// Service details for create and update
#[derive(Args, Debug, Clone)]
pub struct ServiceFields {
    /// Display name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub origin: String,

    #[arg(long)]
    pub destination: String,

    /// Departure time (ISO 8601)
    #[arg(long)]
    pub departure: String,

    /// Arrival time (ISO 8601)
    #[arg(long)]
    pub arrival: Option<String>,

    /// Published route code
    #[arg(long)]
    pub route_code: Option<String>,

    /// Fare per seat
    #[arg(long)]
    pub fare: Option<f64>,

    /// Seats offered
    #[arg(long)]
    pub capacity: Option<u32>,

    /// Vehicle operating the service
    #[arg(long)]
    pub vehicle: Option<String>,
}

impl From<ServiceFields> for ServiceCreate {
    fn from(fields: ServiceFields) -> Self {
        Self {
            name: fields.name,
            origin: fields.origin,
            destination: fields.destination,
            departure_time: fields.departure,
            route_code: fields.route_code,
            arrival_time: fields.arrival,
            fare: fields.fare,
            capacity: fields.capacity,
            vehicle_id: fields.vehicle.as_deref().map(Id::from),
        }
    }
}

/// Dispatch a service subcommand
pub async fn run(opts: &GlobalOptions, command: ServiceCommands) -> Result<()> {
    match command {
        ServiceCommands::List {
            status,
            origin,
            destination,
            date,
            pagination,
        } => {
            let filter = ServiceFilter {
                status,
                origin,
                destination,
                date,
            };
            run_list_command::<PublicService, ServiceDisplay, _, _>(
                opts,
                &pagination,
                "services",
                |client, params| async move { client.list_services(&filter, Some(&params)).await },
            )
            .await
        }
        ServiceCommands::Get { service_id } => {
            run_show_command::<PublicService, ServiceDisplay, _, _>(opts, |client| async move {
                client.get_service(&service_id).await
            })
            .await
        }
        ServiceCommands::Create { fields } => {
            let request = ServiceCreate::from(fields);
            run_show_command::<PublicService, ServiceDisplay, _, _>(opts, |client| async move {
                client.create_service(&request).await
            })
            .await
        }
        ServiceCommands::Update { service_id, fields } => {
            let request = ServiceCreate::from(fields);
            run_show_command::<PublicService, ServiceDisplay, _, _>(opts, |client| async move {
                client.update_service(&service_id, &request).await
            })
            .await
        }
        ServiceCommands::Tickets {
            service_id,
            pagination,
        } => {
            run_list_command::<Ticket, TicketDisplay, _, _>(
                opts,
                &pagination,
                "tickets",
                |client, params| async move {
                    client.list_service_tickets(&service_id, Some(&params)).await
                },
            )
            .await
        }
    }
}
