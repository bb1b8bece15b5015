//! Invoice commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::InvoiceCommands;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_show_command};
use crate::cli::CommandContext;
use crate::client::InvoiceApi;
use crate::client::models::{Id, Invoice, InvoiceCreate, InvoiceFilter, InvoiceItem};
use crate::error::Result;
use crate::models::InvoiceDisplay;
use crate::output::{Formattable, Record};

/// Parse `DESCRIPTION:QUANTITY:UNIT_PRICE`; the description may itself contain colons.
pub fn parse_item(value: &str) -> std::result::Result<InvoiceItem, String> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(price), Some(quantity), Some(description)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err("expected DESCRIPTION:QUANTITY:UNIT_PRICE".to_string());
    };

    let description = description.trim();
    if description.is_empty() {
        return Err("item description is empty".to_string());
    }
    let quantity: f64 = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", quantity))?;
    let unit_price: f64 = price
        .trim()
        .parse()
        .map_err(|_| format!("invalid unit price '{}'", price))?;

    Ok(InvoiceItem {
        description: description.to_string(),
        quantity,
        unit_price,
        amount: None,
    })
}

/// Dispatch an invoice subcommand
pub async fn run(opts: &GlobalOptions, command: InvoiceCommands) -> Result<()> {
    match command {
        InvoiceCommands::List {
            status,
            customer,
            from,
            to,
            pagination,
        } => {
            let filter = InvoiceFilter {
                status,
                customer,
                date_from: from,
                date_to: to,
            };
            run_list_command::<Invoice, InvoiceDisplay, _, _>(
                opts,
                &pagination,
                "invoices",
                |client, params| async move { client.list_invoices(&filter, Some(&params)).await },
            )
            .await
        }
        InvoiceCommands::Get { invoice_id } => {
            run_show_command::<Invoice, InvoiceDisplay, _, _>(opts, |client| async move {
                client.get_invoice(&invoice_id).await
            })
            .await
        }
        InvoiceCommands::Create {
            customer,
            email,
            booking,
            items,
            due,
            notes,
        } => {
            let request = InvoiceCreate {
                customer_name: customer,
                customer_email: email,
                booking_id: booking.as_deref().map(Id::from),
                items,
                due_date: due,
                notes,
            };
            run_show_command::<Invoice, InvoiceDisplay, _, _>(opts, |client| async move {
                client.create_invoice(&request).await
            })
            .await
        }
        InvoiceCommands::Send { invoice_id } => {
            run_show_command::<Invoice, InvoiceDisplay, _, _>(opts, |client| async move {
                client.send_invoice(&invoice_id).await
            })
            .await
        }
        InvoiceCommands::Cancel { invoice_id, yes } => cancel(opts, &invoice_id, yes).await,
    }
}

async fn cancel(opts: &GlobalOptions, invoice_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        let invoice = ctx.client.get_invoice(invoice_id).await?;
        eprintln!(
            "{} Cancel invoice {} ({:.2})?",
            "⚠".yellow(),
            invoice.reference().bold(),
            invoice.total_amount
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm cancellation?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    let invoice = ctx.client.cancel_invoice(invoice_id).await?;
    Record(InvoiceDisplay::from(invoice)).print(ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let item = parse_item("Airport transfer:2:3500").unwrap();
        assert_eq!(item.description, "Airport transfer");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.unit_price, 3500.0);
    }

    #[test]
    fn test_parse_item_keeps_colons_in_description() {
        let item = parse_item("Charter 08:00-17:00:1:42000.50").unwrap();
        assert_eq!(item.description, "Charter 08:00-17:00");
        assert_eq!(item.unit_price, 42000.5);
    }

    #[test]
    fn test_parse_item_rejects_malformed() {
        assert!(parse_item("Airport transfer").is_err());
        assert!(parse_item("Transfer:two:3500").is_err());
        assert!(parse_item(":1:3500").is_err());
    }
}
