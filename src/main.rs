//! fleetop - command-line companion for the fleet management platform

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::Commands;
use cli::args::GlobalOptions;
use error::Result;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if err.requires_sign_in() {
            eprintln!("  → Run 'fleetop login' to sign in again");
        }
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with `--debug`; `RUST_LOG` wins over both
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
    log::debug!("Debug logging enabled");
}

async fn run(cli: cli::Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { token } => cli::auth::login(&opts, token),
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("fleetop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Overview => cli::overview::run(&opts).await,
        Commands::Vehicle(command) => cli::vehicle::run(&opts, command).await,
        Commands::Driver(command) => cli::driver::run(&opts, command).await,
        Commands::Invoice(command) => cli::invoice::run(&opts, command).await,
        Commands::Payment(command) => cli::payment::run(&opts, command).await,
        Commands::Trip(command) => cli::trip::run(&opts, command).await,
        Commands::Route(command) => cli::route::run(&opts, command).await,
        Commands::Service(command) => cli::service::run(&opts, command).await,
        Commands::Admin(command) => cli::admin::run(&opts, command).await,
        Commands::Completions { shell } => cli::completions::run(shell),
    }
}
