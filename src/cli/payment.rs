//! Payment commands

use crate::cli::PaymentCommands;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_show_command};
use crate::client::PaymentApi;
use crate::client::models::{Id, Payment, PaymentCreate, PaymentFilter};
use crate::error::Result;
use crate::models::PaymentDisplay;

/// Dispatch a payment subcommand
pub async fn run(opts: &GlobalOptions, command: PaymentCommands) -> Result<()> {
    match command {
        PaymentCommands::List {
            invoice,
            status,
            pagination,
        } => {
            let filter = PaymentFilter {
                invoice_id: invoice.as_deref().map(Id::from),
                status,
            };
            run_list_command::<Payment, PaymentDisplay, _, _>(
                opts,
                &pagination,
                "payments",
                |client, params| async move { client.list_payments(&filter, Some(&params)).await },
            )
            .await
        }
        PaymentCommands::Get { payment_id } => {
            run_show_command::<Payment, PaymentDisplay, _, _>(opts, |client| async move {
                client.get_payment(&payment_id).await
            })
            .await
        }
        PaymentCommands::Record {
            invoice_id,
            amount,
            method,
            reference,
        } => {
            let request = PaymentCreate {
                invoice_id: Id::from(invoice_id.as_str()),
                amount,
                method,
                reference,
            };
            run_show_command::<Payment, PaymentDisplay, _, _>(opts, |client| async move {
                client.record_payment(&request).await
            })
            .await
        }
    }
}
