//! Login and logout commands
//!
//! Tokens are issued by the backend's sign-in flow; `login` only stores one
//! so later commands can send it.

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::error::{ConfigError, Result};
use crate::session::{CredentialStore, CurrentUser, Session, SessionFile};

/// Run the login command
pub fn login(opts: &GlobalOptions, token: Option<String>) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Paste your access token")
            .interact()?,
    };

    let session = build_session(&token)?;
    let store = SessionFile::at(opts.session_ref())?;
    store.store(&session)?;

    match session.current_user {
        Some(ref user) if user.is_expired() => {
            println!(
                "{} Token stored, but it has already expired; requests will be rejected",
                "⚠".yellow()
            );
        }
        Some(ref user) => {
            let who = user
                .email
                .as_deref()
                .or(user.name.as_deref())
                .or(user.id.as_deref())
                .unwrap_or("unknown user");
            match user.role.as_deref() {
                Some(role) => println!("{} Signed in as {} ({})", "✓".green(), who.bold(), role),
                None => println!("{} Signed in as {}", "✓".green(), who.bold()),
            }
        }
        None => println!("{} Token stored", "✓".green()),
    }
    println!("Session file: {}", store.path().display().to_string().cyan());

    Ok(())
}

/// Validate a pasted token and capture whatever user claims it carries
fn build_session(token: &str) -> Result<Session> {
    let token = token.trim();
    let token = match token.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => token,
    };
    if token.is_empty() || token.eq_ignore_ascii_case("bearer") {
        return Err(ConfigError::Invalid("Access token is empty".to_string()).into());
    }

    Ok(Session {
        access_token: Some(token.to_string()),
        current_user: CurrentUser::from_token(token),
    })
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let store = SessionFile::at(opts.session_ref())?;
    store.clear()?;
    println!("{} Signed out", "✓".green());
    Ok(())
}
