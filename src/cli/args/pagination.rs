//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Page number (0-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params.
    ///
    /// `default_limit` comes from `preferences.page_size` and applies when
    /// `--limit` is not given.
    pub fn to_params(&self, default_limit: usize) -> PaginationParams {
        let mut params = PaginationParams::new().limit(self.limit.unwrap_or(default_limit));

        if let Some(page) = self.page {
            params = params.page(page);
        }

        params
    }
}
