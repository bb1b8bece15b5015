//! Generic list and show command handlers
//!
//! Provides a reusable pattern for commands that follow the standard flow:
//! 1. Create command context
//! 2. Fetch data with pagination
//! 3. Convert to display type
//! 4. Print output

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::{FleetClient, PaginationParams};
use crate::error::Result;
use crate::output::{Formattable, Record};

/// Run a standard list command with the common fetch → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Vehicle`, `Trip`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Vehicle, VehicleDisplay, _, _>(
///     opts,
///     pagination,
///     "vehicles",
///     |client, params| async move { client.list_vehicles(&filter, Some(&params)).await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<FleetClient>, PaginationParams) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching {}", resource_name);

    let params = pagination.to_params(ctx.page_size());
    let items = fetcher(ctx.client.clone(), params).await?;

    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)
}

/// Run a single-record command: fetch one item and print it as a record.
pub async fn run_show_command<T, D, Fut, F>(opts: &GlobalOptions, fetcher: F) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<T>>,
    F: FnOnce(Arc<FleetClient>) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    let item = fetcher(ctx.client.clone()).await?;
    Record(D::from(item)).print(ctx.format)
}
