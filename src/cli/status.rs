//! Status command implementation

use colored::Colorize;

use crate::cache::CacheStorage;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::session::{CredentialStore, SessionFile};

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Fleetop Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_at(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }
    println!("API URL: {}", config.api_url(opts.api_url_ref())?.cyan());
    println!();

    let store = SessionFile::at(opts.session_ref())?;
    println!("Session file: {}", store.path().display().to_string().cyan());

    match store.access_token()? {
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'fleetop login' to sign in");
        }
        Some(_) => match store.current_user()? {
            Some(user) => {
                let who = user
                    .email
                    .as_deref()
                    .or(user.name.as_deref())
                    .unwrap_or("unknown user");
                let role = user.role.as_deref().unwrap_or("no role claim");
                println!("{} Signed in as {} ({})", "✓".green(), who.bold(), role);

                match user.expires_at {
                    Some(_) if user.is_expired() => {
                        println!("{} Access token expired", "⚠".yellow());
                        println!("  → Run 'fleetop login' to sign in again");
                    }
                    Some(expires) => {
                        let remaining = expires.signed_duration_since(chrono::Utc::now());
                        println!(
                            "{} Access token valid (expires in {}h {}m)",
                            "✓".green(),
                            remaining.num_hours(),
                            remaining.num_minutes() % 60
                        );
                    }
                    None => println!("{} Access token has no expiry claim", "○".dimmed()),
                }
            }
            None => println!("{} Access token stored (opaque)", "✓".green()),
        },
    }
    println!();

    if opts.no_cache {
        println!("{} Response cache disabled (--no-cache)", "○".dimmed());
    } else {
        match CacheStorage::open().and_then(|cache| cache.stats()) {
            Ok(stats) => {
                let path = CacheStorage::cache_dir()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "unknown".to_string());
                println!("Cache: {}", path.cyan());
                println!(
                    "{} {} fresh of {} entries ({} bytes)",
                    "○".dimmed(),
                    stats.valid_entries,
                    stats.total_entries,
                    stats.total_size_bytes
                );
                if let Some(newest) = stats.newest_entry {
                    println!(
                        "  Last write: {}",
                        newest
                            .with_timezone(&chrono::Local)
                            .format("%Y-%m-%d %H:%M")
                    );
                }
            }
            Err(e) => println!("{} Cache unavailable: {}", "⚠".yellow(), e),
        }
    }
    println!();

    Ok(())
}
