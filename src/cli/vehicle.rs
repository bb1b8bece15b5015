//! Vehicle commands

use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_show_command};
use crate::cli::{CommandContext, OutputFormat, PaginationArgs, VehicleCommands};
use crate::client::VehicleApi;
use crate::client::models::{StatusChange, Vehicle, VehicleCreate, VehicleFilter, VehicleStats};
use crate::error::Result;
use crate::models::VehicleDisplay;
use crate::output::json;

/// Vehicle details for create and update
#[derive(Args, Debug, Clone)]
pub struct VehicleFields {
    /// License plate
    #[arg(long)]
    pub plate: String,

    #[arg(long)]
    pub make: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub year: Option<i32>,

    /// bus, van, truck, sedan...
    #[arg(long = "type", short = 't')]
    pub vehicle_type: Option<String>,

    /// Seats or payload units
    #[arg(long)]
    pub capacity: Option<u32>,

    #[arg(long)]
    pub fuel_type: Option<String>,
}

impl From<VehicleFields> for VehicleCreate {
    fn from(fields: VehicleFields) -> Self {
        Self {
            license_plate: fields.plate,
            make: fields.make,
            model: fields.model,
            year: fields.year,
            vehicle_type: fields.vehicle_type,
            capacity: fields.capacity,
            fuel_type: fields.fuel_type,
        }
    }
}

/// Dispatch a vehicle subcommand
pub async fn run(opts: &GlobalOptions, command: VehicleCommands) -> Result<()> {
    match command {
        VehicleCommands::List {
            status,
            vehicle_type,
            search,
            pagination,
        } => {
            let filter = VehicleFilter {
                status,
                vehicle_type,
                search,
            };
            list(opts, &pagination, filter).await
        }
        VehicleCommands::Get { vehicle_id } => {
            run_show_command::<Vehicle, VehicleDisplay, _, _>(opts, |client| async move {
                client.get_vehicle(&vehicle_id).await
            })
            .await
        }
        VehicleCommands::Create { fields } => {
            let request = VehicleCreate::from(fields);
            run_show_command::<Vehicle, VehicleDisplay, _, _>(opts, |client| async move {
                client.create_vehicle(&request).await
            })
            .await
        }
        VehicleCommands::Update { vehicle_id, fields } => {
            let request = VehicleCreate::from(fields);
            run_show_command::<Vehicle, VehicleDisplay, _, _>(opts, |client| async move {
                client.update_vehicle(&vehicle_id, &request).await
            })
            .await
        }
        VehicleCommands::Delete { vehicle_id, yes } => delete(opts, &vehicle_id, yes).await,
        VehicleCommands::SetStatus {
            vehicle_id,
            status,
            reason,
        } => {
            let change = StatusChange { status, reason };
            run_show_command::<Vehicle, VehicleDisplay, _, _>(opts, |client| async move {
                client.set_vehicle_status(&vehicle_id, &change).await
            })
            .await
        }
        VehicleCommands::Stats => stats(opts).await,
    }
}

async fn list(opts: &GlobalOptions, pagination: &PaginationArgs, filter: VehicleFilter) -> Result<()> {
    run_list_command::<Vehicle, VehicleDisplay, _, _>(
        opts,
        pagination,
        "vehicles",
        |client, params| async move { client.list_vehicles(&filter, Some(&params)).await },
    )
    .await
}

async fn delete(opts: &GlobalOptions, vehicle_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        let vehicle = ctx.client.get_vehicle(vehicle_id).await?;
        eprintln!(
            "{} Delete vehicle {} ({})? This cannot be undone.",
            "⚠".yellow(),
            vehicle.license_plate.bold(),
            vehicle.id
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    ctx.client.delete_vehicle(vehicle_id).await?;
    eprintln!("{} Vehicle {} deleted", "✓".green(), vehicle_id);
    Ok(())
}

async fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stats = ctx.client.vehicle_stats().await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&stats)?),
        OutputFormat::Table => print_stats(&stats),
    }
    Ok(())
}

fn print_stats(stats: &VehicleStats) {
    println!("{}", "Fleet Vehicles".bold());
    println!("────────────────────────────────────────");

    let known = [
        ("Total", stats.total_vehicles()),
        ("Available", stats.available_vehicles()),
        ("In use", stats.in_use_vehicles()),
        ("Maintenance", stats.maintenance_vehicles()),
    ];
    for (label, value) in known {
        if let Some(count) = value {
            println!("{:<22}{}", format!("{}:", label), count);
        }
    }

    const KNOWN: [&str; 4] = [
        "total_vehicles",
        "available_vehicles",
        "in_use_vehicles",
        "maintenance_vehicles",
    ];
    for (key, value) in stats
        .fields()
        .filter(|(key, value)| !KNOWN.contains(&key.as_str()) || value.as_u64().is_none())
    {
        let label = format!("{}:", key.replace('_', " "));
        match value {
            serde_json::Value::String(s) => println!("{:<22}{}", label, s),
            other => println!("{:<22}{}", label, other),
        }
    }
}
