//! Fleet overview command

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{
    Driver, DriverFilter, DriverStatus, Invoice, InvoiceFilter, VehicleStats,
};
use crate::client::{FleetApi, PaginationParams};
use crate::error::Result;
use crate::output::json;

/// Summary assembled from three independent requests
#[derive(Debug, Serialize)]
pub struct Overview {
    pub vehicles: VehicleStats,
    pub drivers: DriverSummary,
    pub invoices: InvoiceSummary,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct DriverSummary {
    pub listed: usize,
    pub available: usize,
    pub on_trip: usize,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct InvoiceSummary {
    pub open: usize,
    pub overdue: usize,
    pub outstanding_amount: f64,
}

impl DriverSummary {
    fn from_drivers(drivers: &[Driver]) -> Self {
        Self {
            listed: drivers.len(),
            available: drivers
                .iter()
                .filter(|d| d.status == DriverStatus::Available)
                .count(),
            on_trip: drivers
                .iter()
                .filter(|d| d.status == DriverStatus::OnTrip)
                .count(),
        }
    }
}

impl InvoiceSummary {
    fn from_invoices(invoices: &[Invoice]) -> Self {
        let open: Vec<&Invoice> = invoices.iter().filter(|i| i.is_open()).collect();
        Self {
            open: open.len(),
            overdue: open
                .iter()
                .filter(|i| i.status == crate::client::models::InvoiceStatus::Overdue)
                .count(),
            outstanding_amount: open.iter().map(|i| i.total_amount).sum(),
        }
    }
}

/// Fetch the three parts concurrently; the first failure aborts the rest.
pub async fn gather<C: FleetApi + ?Sized>(client: &C, page: &PaginationParams) -> Result<Overview> {
    let driver_filter = DriverFilter::default();
    let invoice_filter = InvoiceFilter::default();
    let (vehicles, drivers, invoices) = futures::try_join!(
        client.vehicle_stats(),
        client.list_drivers(&driver_filter, Some(page)),
        client.list_invoices(&invoice_filter, Some(page)),
    )?;

    Ok(Overview {
        vehicles,
        drivers: DriverSummary::from_drivers(&drivers),
        invoices: InvoiceSummary::from_invoices(&invoices),
    })
}

/// Run the overview command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let page = PaginationParams::new().limit(ctx.page_size());
    let overview = gather(ctx.client.as_ref(), &page).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&overview)?),
        OutputFormat::Table => print_overview(&overview),
    }
    Ok(())
}

fn print_overview(overview: &Overview) {
    println!("{}\n", "Fleet Overview".bold());

    let v = &overview.vehicles;
    println!("{}", "Vehicles".cyan());
    println!("  Total:       {}", count(v.total_vehicles()));
    println!("  Available:   {}", count(v.available_vehicles()));
    println!("  In use:      {}", count(v.in_use_vehicles()));
    println!("  Maintenance: {}", count(v.maintenance_vehicles()));
    println!();

    let d = &overview.drivers;
    println!("{}", "Drivers".cyan());
    println!("  Listed:      {}", d.listed);
    println!("  Available:   {}", d.available);
    println!("  On trip:     {}", d.on_trip);
    println!();

    let i = &overview.invoices;
    println!("{}", "Invoices".cyan());
    println!("  Open:        {}", i.open);
    if i.overdue > 0 {
        println!("  Overdue:     {}", i.overdue.to_string().red());
    } else {
        println!("  Overdue:     0");
    }
    println!("  Outstanding: {:.2}", i.outstanding_amount);
}

fn count(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FleetClient;
    use crate::session::{CredentialStore, MemorySession};
    use serde_json::json;
    use std::sync::Arc;

    async fn mock_json(
        server: &mut mockito::ServerGuard,
        path: &str,
        status: usize,
        body: &str,
    ) -> mockito::Mock {
        server
            .mock("GET", path)
            .match_query(mockito::Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_gather_combines_three_requests() {
        let mut server = mockito::Server::new_async().await;
        let _stats =
            mock_json(&mut server, "/api/v1/vehicles/stats", 200, r#"{"total_vehicles": 9}"#).await;
        let _drivers = mock_json(
            &mut server,
            "/api/v1/fleet/drivers",
            200,
            r#"[{"id": 1, "status": "available"}]"#,
        )
        .await;
        let _invoices = mock_json(
            &mut server,
            "/api/v1/payments/invoices",
            200,
            r#"[{"id": 1, "status": "sent", "total_amount": 40.0}]"#,
        )
        .await;

        let client = FleetClient::new(
            format!("{}/api/v1", server.url()),
            Arc::new(MemorySession::with_token("tok")),
        )
        .unwrap();
        let overview = gather(&client, &PaginationParams::new().limit(50))
            .await
            .unwrap();

        assert_eq!(overview.vehicles.total_vehicles(), Some(9));
        assert_eq!(overview.drivers.available, 1);
        assert_eq!(overview.invoices.outstanding_amount, 40.0);
    }

    #[tokio::test]
    async fn test_gather_fails_when_any_part_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _stats =
            mock_json(&mut server, "/api/v1/vehicles/stats", 200, r#"{"total_vehicles": 9}"#).await;
        let _drivers =
            mock_json(&mut server, "/api/v1/fleet/drivers", 403, r#"{"detail":"Forbidden"}"#).await;
        let _invoices = mock_json(&mut server, "/api/v1/payments/invoices", 200, "[]").await;

        let session = Arc::new(MemorySession::with_token("tok"));
        let client =
            FleetClient::new(format!("{}/api/v1", server.url()), session.clone()).unwrap();
        let err = gather(&client, &PaginationParams::new()).await.unwrap_err();

        assert!(err.requires_sign_in());
        assert!(session.access_token().unwrap().is_none());
    }

    #[test]
    fn test_driver_summary() {
        let drivers: Vec<Driver> = serde_json::from_value(json!([
            { "id": 1, "status": "available" },
            { "id": 2, "status": "on_trip" },
            { "id": 3, "status": "available" },
            { "id": 4, "status": "suspended" }
        ]))
        .unwrap();

        assert_eq!(
            DriverSummary::from_drivers(&drivers),
            DriverSummary {
                listed: 4,
                available: 2,
                on_trip: 1
            }
        );
    }

    #[test]
    fn test_invoice_summary_counts_only_open() {
        let invoices: Vec<Invoice> = serde_json::from_value(json!([
            { "id": 1, "status": "sent", "total_amount": 100.0 },
            { "id": 2, "status": "overdue", "total_amount": 250.5 },
            { "id": 3, "status": "paid", "total_amount": 999.0 },
            { "id": 4, "status": "draft", "total_amount": 50.0 }
        ]))
        .unwrap();

        let summary = InvoiceSummary::from_invoices(&invoices);
        assert_eq!(summary.open, 2);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.outstanding_amount, 350.5);
    }
}
