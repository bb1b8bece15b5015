//! Route optimization commands

use std::io::Read;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat, RouteCommands};
use crate::client::RouteApi;
use crate::client::models::{OptimizationResult, RouteOptimizationRequest};
use crate::error::{Error, Result};
use crate::models::{OptimizationDisplay, RouteStopDisplay};
use crate::output::{Formattable, Record, json};

/// Dispatch a route subcommand
pub async fn run(opts: &GlobalOptions, command: RouteCommands) -> Result<()> {
    match command {
        RouteCommands::Optimize { file } => {
            let request = read_request(&file)?;
            let ctx = CommandContext::new(opts)?;
            let result = ctx.client.optimize_routes(&request).await?;
            print_result(result, ctx.format)
        }
        RouteCommands::List { pagination } => {
            run_list_command::<OptimizationResult, OptimizationDisplay, _, _>(
                opts,
                &pagination,
                "optimizations",
                |client, params| async move { client.list_optimizations(Some(&params)).await },
            )
            .await
        }
        RouteCommands::Get { optimization_id } => {
            let ctx = CommandContext::new(opts)?;
            let result = ctx.client.get_optimization(&optimization_id).await?;
            print_result(result, ctx.format)
        }
    }
}

/// Load an optimization request from a file path, or stdin for `-`
fn read_request(path: &str) -> Result<RouteOptimizationRequest> {
    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| Error::Other(format!("Failed to read {}: {}", path, e)))?
    };

    let request: RouteOptimizationRequest = serde_json::from_str(&contents)?;
    if request.stops.is_empty() {
        return Err(Error::Other("Request has no stops to route".to_string()));
    }
    Ok(request)
}

/// Summary record followed by the per-vehicle stop sequence
fn print_result(result: OptimizationResult, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", json::format_json(&result)?);
        return Ok(());
    }

    let stops = RouteStopDisplay::rows(&result);
    Record(OptimizationDisplay::from(result)).print(format)?;
    if !stops.is_empty() {
        println!();
        stops.print(format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"vehicle_ids": [1], "stops": [{{"location": {{"latitude": -1.28, "longitude": 36.82}}}}]}}"#
        )
        .unwrap();

        let request = read_request(file.path().to_str().unwrap()).unwrap();
        assert_eq!(request.stops.len(), 1);
    }

    #[test]
    fn test_read_request_rejects_empty_stops() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"vehicle_ids": [1], "stops": []}}"#).unwrap();

        let err = read_request(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("no stops"));
    }

    #[test]
    fn test_read_request_missing_file() {
        let err = read_request("/nonexistent/request.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/request.json"));
    }
}
