//! Trip commands

use crate::cli::TripCommands;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_show_command};
use crate::client::TripApi;
use crate::client::models::{DispatchRequest, Id, StatusChange, Trip, TripCreate, TripFilter};
use crate::error::Result;
use crate::models::TripDisplay;

/// Dispatch a trip subcommand
pub async fn run(opts: &GlobalOptions, command: TripCommands) -> Result<()> {
    match command {
        TripCommands::List {
            status,
            driver,
            vehicle,
            from,
            to,
            pagination,
        } => {
            let filter = TripFilter {
                status,
                driver_id: driver.as_deref().map(Id::from),
                vehicle_id: vehicle.as_deref().map(Id::from),
                date_from: from,
                date_to: to,
            };
            run_list_command::<Trip, TripDisplay, _, _>(
                opts,
                &pagination,
                "trips",
                |client, params| async move { client.list_trips(&filter, Some(&params)).await },
            )
            .await
        }
        TripCommands::Get { trip_id } => {
            run_show_command::<Trip, TripDisplay, _, _>(opts, |client| async move {
                client.get_trip(&trip_id).await
            })
            .await
        }
        TripCommands::Create {
            origin,
            destination,
            departure,
            booking,
            passengers,
            notes,
        } => {
            let request = TripCreate {
                origin,
                destination,
                scheduled_departure: departure,
                booking_id: booking.as_deref().map(Id::from),
                passenger_count: passengers,
                notes,
            };
            run_show_command::<Trip, TripDisplay, _, _>(opts, |client| async move {
                client.create_trip(&request).await
            })
            .await
        }
        TripCommands::SetStatus {
            trip_id,
            status,
            reason,
        } => {
            let change = StatusChange { status, reason };
            run_show_command::<Trip, TripDisplay, _, _>(opts, |client| async move {
                client.set_trip_status(&trip_id, &change).await
            })
            .await
        }
        TripCommands::Dispatch {
            trip_id,
            driver,
            vehicle,
        } => {
            let request = DispatchRequest {
                driver_id: Id::from(driver.as_str()),
                vehicle_id: Id::from(vehicle.as_str()),
            };
            run_show_command::<Trip, TripDisplay, _, _>(opts, |client| async move {
                client.dispatch_trip(&trip_id, &request).await
            })
            .await
        }
    }
}
