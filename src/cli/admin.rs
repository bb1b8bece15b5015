//! User administration commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_show_command};
use crate::cli::{AdminCommands, CommandContext};
use crate::client::AdminApi;
use crate::client::models::{User, UserFilter};
use crate::error::Result;
use crate::models::UserDisplay;
use crate::output::{Formattable, Record};

/// Dispatch an admin subcommand
pub async fn run(opts: &GlobalOptions, command: AdminCommands) -> Result<()> {
    match command {
        AdminCommands::Users {
            role,
            active,
            search,
            pagination,
        } => {
            let filter = UserFilter {
                role,
                is_active: active,
                search,
            };
            run_list_command::<User, UserDisplay, _, _>(
                opts,
                &pagination,
                "users",
                |client, params| async move { client.list_users(&filter, Some(&params)).await },
            )
            .await
        }
        AdminCommands::User { user_id } => {
            run_show_command::<User, UserDisplay, _, _>(opts, |client| async move {
                client.get_user(&user_id).await
            })
            .await
        }
        AdminCommands::SetRole { user_id, role } => {
            run_show_command::<User, UserDisplay, _, _>(opts, |client| async move {
                client.set_user_role(&user_id, role).await
            })
            .await
        }
        AdminCommands::Deactivate { user_id, yes } => deactivate(opts, &user_id, yes).await,
    }
}

async fn deactivate(opts: &GlobalOptions, user_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        let user = ctx.client.get_user(user_id).await?;
        eprintln!(
            "{} Deactivate {} ({})? They will no longer be able to sign in.",
            "⚠".yellow(),
            user.email.bold(),
            user.role
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm deactivation?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    let user = ctx.client.deactivate_user(user_id).await?;
    Record(UserDisplay::from(user)).print(ctx.format)
}
