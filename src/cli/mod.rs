//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::{
    DriverStatus, InvoiceStatus, PaymentStatus, ServiceStatus, TripStatus, UserRole,
    VehicleStatus,
};

pub mod admin;
pub mod args;
pub mod auth;
pub mod completions;
pub mod context;
pub mod driver;
pub mod handlers;
pub mod invoice;
pub mod overview;
pub mod payment;
pub mod route;
pub mod service;
pub mod status;
pub mod trip;
pub mod vehicle;

pub use args::{OutputFormat, PaginationArgs, parse_wire};
pub use context::CommandContext;

use driver::DriverFields;
use invoice::parse_item;
use service::ServiceFields;
use vehicle::VehicleFields;

use crate::client::models::InvoiceItem;

/// fleetop - command-line companion for the fleet management platform
#[derive(Parser, Debug)]
#[command(name = "fleetop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "FLEETOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "FLEETOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "FLEETOP_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Backend base URL, including the /api/v1 prefix
    #[arg(long, global = true, env = "FLEETOP_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FLEETOP_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from API
    #[arg(long, global = true, env = "FLEETOP_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store an access token for subsequent commands
    Login {
        /// Access token (prompted for when omitted)
        #[arg(long, env = "FLEETOP_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Forget the stored access token
    Logout,

    /// Show session and configuration status
    Status,

    /// Display version information
    Version,

    /// Fleet-wide summary: vehicle counts, drivers, open invoices
    Overview,

    /// Manage vehicles
    #[command(subcommand)]
    Vehicle(VehicleCommands),

    /// Manage drivers
    #[command(subcommand)]
    Driver(DriverCommands),

    /// Manage invoices
    #[command(subcommand)]
    Invoice(InvoiceCommands),

    /// Record and list payments
    #[command(subcommand)]
    Payment(PaymentCommands),

    /// Schedule and dispatch trips
    #[command(subcommand)]
    Trip(TripCommands),

    /// Run and inspect route optimizations
    #[command(subcommand)]
    Route(RouteCommands),

    /// Manage public transport services
    #[command(subcommand)]
    Service(ServiceCommands),

    /// Administer platform users
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   fleetop completions bash > /etc/bash_completion.d/fleetop
  zsh:    fleetop completions zsh > \"${fpath[1]}/_fleetop\"
  fish:   fleetop completions fish > ~/.config/fish/completions/fleetop.fish")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Vehicle subcommands
#[derive(Subcommand, Debug)]
pub enum VehicleCommands {
    /// List vehicles
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status (available, in_use, maintenance, out_of_service, retired)
        #[arg(long, value_parser = parse_wire::<VehicleStatus>)]
        status: Option<VehicleStatus>,

        /// Filter by vehicle type (bus, van, truck...)
        #[arg(long = "type", short = 't')]
        vehicle_type: Option<String>,

        /// Search plate, make or model
        #[arg(long, short = 's')]
        search: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one vehicle
    Get {
        /// Vehicle ID
        vehicle_id: String,
    },

    /// Register a vehicle
    Create {
        #[command(flatten)]
        fields: VehicleFields,
    },

    /// Replace a vehicle's details
    Update {
        /// Vehicle ID
        vehicle_id: String,

        #[command(flatten)]
        fields: VehicleFields,
    },

    /// Delete a vehicle
    Delete {
        /// Vehicle ID
        vehicle_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Change a vehicle's status
    SetStatus {
        /// Vehicle ID
        vehicle_id: String,

        /// New status
        #[arg(value_parser = parse_wire::<VehicleStatus>)]
        status: VehicleStatus,

        /// Reason recorded with the change
        #[arg(long)]
        reason: Option<String>,
    },

    /// Fleet-wide vehicle counters (cached for 5 minutes)
    Stats,
}

/// Driver subcommands
#[derive(Subcommand, Debug)]
pub enum DriverCommands {
    /// List drivers
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status (available, on_trip, off_duty, on_leave, suspended)
        #[arg(long, value_parser = parse_wire::<DriverStatus>)]
        status: Option<DriverStatus>,

        /// Search name, email or license number
        #[arg(long, short = 's')]
        search: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one driver
    Get {
        /// Driver ID
        driver_id: String,
    },

    /// Register a driver
    Create {
        #[command(flatten)]
        fields: DriverFields,
    },

    /// Replace a driver's details
    Update {
        /// Driver ID
        driver_id: String,

        #[command(flatten)]
        fields: DriverFields,
    },

    /// Delete a driver
    Delete {
        /// Driver ID
        driver_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Change a driver's status
    SetStatus {
        /// Driver ID
        driver_id: String,

        /// New status
        #[arg(value_parser = parse_wire::<DriverStatus>)]
        status: DriverStatus,

        /// Reason recorded with the change
        #[arg(long)]
        reason: Option<String>,
    },
}

/// Invoice subcommands
#[derive(Subcommand, Debug)]
pub enum InvoiceCommands {
    /// List invoices
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status (draft, sent, partially_paid, paid, overdue, cancelled)
        #[arg(long, value_parser = parse_wire::<InvoiceStatus>)]
        status: Option<InvoiceStatus>,

        /// Filter by customer name
        #[arg(long)]
        customer: Option<String>,

        /// Issued on or after (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Issued on or before (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one invoice
    Get {
        /// Invoice ID
        invoice_id: String,
    },

    /// Draft a new invoice
    #[command(after_help = "EXAMPLES:\n  \
            fleetop invoice create --customer \"Acme Ltd\" --item \"Airport transfer:2:3500\"\n  \
            fleetop invoice create --customer Acme --item \"Charter:1:42000\" --due 2026-11-30")]
    Create {
        /// Customer name
        #[arg(long)]
        customer: String,

        /// Customer email
        #[arg(long)]
        email: Option<String>,

        /// Booking the invoice is for
        #[arg(long)]
        booking: Option<String>,

        /// Line item as DESCRIPTION:QUANTITY:UNIT_PRICE (repeatable)
        #[arg(long = "item", required = true, value_parser = parse_item)]
        items: Vec<InvoiceItem>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Send an invoice to the customer
    Send {
        /// Invoice ID
        invoice_id: String,
    },

    /// Cancel an invoice
    Cancel {
        /// Invoice ID
        invoice_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Payment subcommands
#[derive(Subcommand, Debug)]
pub enum PaymentCommands {
    /// List payments
    #[command(visible_alias = "ls")]
    List {
        /// Only payments against this invoice
        #[arg(long)]
        invoice: Option<String>,

        /// Filter by status (pending, completed, failed, refunded)
        #[arg(long, value_parser = parse_wire::<PaymentStatus>)]
        status: Option<PaymentStatus>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one payment
    Get {
        /// Payment ID
        payment_id: String,
    },

    /// Record a payment against an invoice
    Record {
        /// Invoice ID
        invoice_id: String,

        /// Amount paid
        amount: f64,

        /// Payment method (cash, card, mobile_money, bank_transfer...)
        #[arg(long, short = 'm')]
        method: String,

        /// External transaction reference
        #[arg(long)]
        reference: Option<String>,
    },
}

/// Trip subcommands
#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// List trips
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status (scheduled, dispatched, in_progress, completed, cancelled)
        #[arg(long, value_parser = parse_wire::<TripStatus>)]
        status: Option<TripStatus>,

        /// Only trips assigned to this driver
        #[arg(long)]
        driver: Option<String>,

        /// Only trips assigned to this vehicle
        #[arg(long)]
        vehicle: Option<String>,

        /// Departing on or after (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Departing on or before (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one trip
    Get {
        /// Trip ID
        trip_id: String,
    },

    /// Schedule a trip
    Create {
        /// Pick-up point
        #[arg(long)]
        origin: String,

        /// Drop-off point
        #[arg(long)]
        destination: String,

        /// Scheduled departure (ISO 8601)
        #[arg(long)]
        departure: String,

        /// Booking the trip serves
        #[arg(long)]
        booking: Option<String>,

        /// Number of passengers
        #[arg(long)]
        passengers: Option<u32>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Change a trip's status
    SetStatus {
        /// Trip ID
        trip_id: String,

        /// New status
        #[arg(value_parser = parse_wire::<TripStatus>)]
        status: TripStatus,

        /// Reason recorded with the change
        #[arg(long)]
        reason: Option<String>,
    },

    /// Assign a driver and vehicle to a trip
    Dispatch {
        /// Trip ID
        trip_id: String,

        /// Driver ID
        #[arg(long)]
        driver: String,

        /// Vehicle ID
        #[arg(long)]
        vehicle: String,
    },
}

/// Route optimization subcommands
#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Submit an optimization request read from a JSON file
    #[command(after_help = "The file holds the request body, for example:\n  \
            {\"vehicle_ids\": [1, 2], \"stops\": [{\"location\": {\"latitude\": -1.28, \"longitude\": 36.82}}]}")]
    Optimize {
        /// Path to the request JSON ("-" for stdin)
        #[arg(long, short = 'f')]
        file: String,
    },

    /// List previous optimization runs
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show an optimization run with its stop sequence
    Get {
        /// Optimization ID
        optimization_id: String,
    },
}

/// Public transport service subcommands
#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// List services
    #[command(visible_alias = "ls")]
    List {
        /// Filter by status (scheduled, active, suspended, completed, cancelled)
        #[arg(long, value_parser = parse_wire::<ServiceStatus>)]
        status: Option<ServiceStatus>,

        /// Departing from
        #[arg(long)]
        origin: Option<String>,

        /// Arriving at
        #[arg(long)]
        destination: Option<String>,

        /// Service date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one service
    Get {
        /// Service ID
        service_id: String,
    },

    /// Schedule a service
    Create {
        #[command(flatten)]
        fields: ServiceFields,
    },

    /// Replace a service's details
    Update {
        /// Service ID
        service_id: String,

        #[command(flatten)]
        fields: ServiceFields,
    },

    /// List tickets sold on a service
    Tickets {
        /// Service ID
        service_id: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// User administration subcommands
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List platform users
    Users {
        /// Filter by role (admin, fleet_manager, dispatcher, accountant, driver, customer)
        #[arg(long, value_parser = parse_wire::<UserRole>)]
        role: Option<UserRole>,

        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,

        /// Search email or name
        #[arg(long, short = 's')]
        search: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one user
    User {
        /// User ID
        user_id: String,
    },

    /// Change a user's role
    SetRole {
        /// User ID
        user_id: String,

        /// New role
        #[arg(value_parser = parse_wire::<UserRole>)]
        role: UserRole,
    },

    /// Deactivate a user account
    Deactivate {
        /// User ID
        user_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fleetop",
            "vehicle",
            "list",
            "--status",
            "in-use",
            "--format",
            "json",
            "--no-cache",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_cache);
        match cli.command {
            Commands::Vehicle(VehicleCommands::List { status, .. }) => {
                assert_eq!(status, Some(VehicleStatus::InUse));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_status() {
        let result = Cli::try_parse_from(["fleetop", "trip", "set-status", "7", "teleported"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invoice_items_are_parsed() {
        let cli = Cli::try_parse_from([
            "fleetop",
            "invoice",
            "create",
            "--customer",
            "Acme",
            "--item",
            "Airport transfer:2:3500",
        ])
        .unwrap();

        match cli.command {
            Commands::Invoice(InvoiceCommands::Create { items, .. }) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].quantity, 2.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
