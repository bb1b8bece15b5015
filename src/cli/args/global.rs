//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to `preferences.format`
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.fleetop/config.yaml)
    pub config: Option<String>,

    /// Custom session file path (defaults to ~/.fleetop/session.yaml)
    pub session: Option<String>,

    /// Backend base URL override
    pub api_url: Option<String>,

    /// Skip the local response cache
    pub no_cache: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            session: cli.session.clone(),
            api_url: cli.api_url.clone(),
            no_cache: cli.no_cache,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get session path as `Option<&str>`.
    pub fn session_ref(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/config.yaml".to_string()),
            session: Some("/custom/session.yaml".to_string()),
            api_url: Some("http://fleet.internal/api/v1".to_string()),
            no_cache: true,
        };

        assert_eq!(opts.config_ref(), Some("/custom/config.yaml"));
        assert_eq!(opts.session_ref(), Some("/custom/session.yaml"));
        assert_eq!(opts.api_url_ref(), Some("http://fleet.internal/api/v1"));
        assert!(opts.no_cache);
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions::default();

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.session_ref(), None);
        assert_eq!(opts.api_url_ref(), None);
        assert!(!opts.no_cache);
    }
}
