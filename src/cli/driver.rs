//! Driver commands

use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_show_command};
use crate::cli::{CommandContext, DriverCommands};
use crate::client::DriverApi;
use crate::client::models::{Driver, DriverCreate, DriverFilter, StatusChange};
use crate::error::Result;
use crate::models::DriverDisplay;

/// Driver details for create and update
#[derive(Args, Debug, Clone)]
pub struct DriverFields {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Driving license number
    #[arg(long = "license")]
    pub license_number: Option<String>,

    /// License expiry (YYYY-MM-DD)
    #[arg(long)]
    pub license_expiry: Option<String>,
}

impl From<DriverFields> for DriverCreate {
    fn from(fields: DriverFields) -> Self {
        Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            license_number: fields.license_number,
            license_expiry: fields.license_expiry,
        }
    }
}

/// Dispatch a driver subcommand
pub async fn run(opts: &GlobalOptions, command: DriverCommands) -> Result<()> {
    match command {
        DriverCommands::List {
            status,
            search,
            pagination,
        } => {
            let filter = DriverFilter { status, search };
            run_list_command::<Driver, DriverDisplay, _, _>(
                opts,
                &pagination,
                "drivers",
                |client, params| async move { client.list_drivers(&filter, Some(&params)).await },
            )
            .await
        }
        DriverCommands::Get { driver_id } => {
            run_show_command::<Driver, DriverDisplay, _, _>(opts, |client| async move {
                client.get_driver(&driver_id).await
            })
            .await
        }
        DriverCommands::Create { fields } => {
            let request = DriverCreate::from(fields);
            run_show_command::<Driver, DriverDisplay, _, _>(opts, |client| async move {
                client.create_driver(&request).await
            })
            .await
        }
        DriverCommands::Update { driver_id, fields } => {
            let request = DriverCreate::from(fields);
            run_show_command::<Driver, DriverDisplay, _, _>(opts, |client| async move {
                client.update_driver(&driver_id, &request).await
            })
            .await
        }
        DriverCommands::Delete { driver_id, yes } => delete(opts, &driver_id, yes).await,
        DriverCommands::SetStatus {
            driver_id,
            status,
            reason,
        } => {
            let change = StatusChange { status, reason };
            run_show_command::<Driver, DriverDisplay, _, _>(opts, |client| async move {
                client.set_driver_status(&driver_id, &change).await
            })
            .await
        }
    }
}

async fn delete(opts: &GlobalOptions, driver_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        let driver = ctx.client.get_driver(driver_id).await?;
        eprintln!(
            "{} Delete driver {} ({})? This cannot be undone.",
            "⚠".yellow(),
            driver.full_name().bold(),
            driver.id
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

    ctx.client.delete_driver(driver_id).await?;
    eprintln!("{} Driver {} deleted", "✓".green(), driver_id);
    Ok(())
}
