//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, credential wiring, and client initialization.

use std::sync::Arc;

use crate::cache::{CacheStorage, ResponseCache};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::FleetClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionFile;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// API client (Arc-wrapped for concurrent requests)
    pub client: Arc<FleetClient>,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (or default location)
    /// - Resolving the backend base URL
    /// - Opening the session file used as the credential store
    /// - Attaching the stats cache unless `--no-cache` was given
    ///
    /// No sign-in check happens here; a missing token surfaces from the
    /// first request instead.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let base_url = config.api_url(opts.api_url_ref())?;
        let session = Arc::new(SessionFile::at(opts.session_ref())?);

        let mut client = FleetClient::new(base_url, session)?;
        if !opts.no_cache {
            match CacheStorage::open() {
                Ok(storage) => client = client.with_stats_cache(ResponseCache::new(storage)),
                Err(e) => log::warn!("Response cache unavailable: {}", e),
            }
        }

        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            client: Arc::new(client),
            format,
        })
    }

    /// Default `limit` for list commands
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }
}

/// `--format` beats `preferences.format`, which beats the table default
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_preference)
    })
    .unwrap_or_default()
}
