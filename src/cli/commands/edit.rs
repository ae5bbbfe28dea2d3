//! `passvault edit` — replace the fields of one entry.
//!
//! Fields passed as flags are used as-is; the others are prompted for
//! with the current value pre-filled.

use crate::cli::output;
use crate::cli::{entry_index, prompt_field, Cli, Context};
use crate::errors::{PassVaultError, Result};
use crate::generator;
use crate::vault::CredentialRecord;

/// Arguments of the `edit` command.
#[derive(Debug, Default)]
pub struct EditArgs<'a> {
    pub number: usize,
    pub service: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub generate: bool,
}

/// Execute the `edit` command.
pub fn execute(cli: &Cli, args: &EditArgs<'_>) -> Result<()> {
    let ctx = Context::open(cli)?;
    run(&ctx, args, false)
}

/// Edit an entry using an already opened context.
pub fn run(ctx: &Context, args: &EditArgs<'_>, ask_remember: bool) -> Result<()> {
    let index = entry_index(args.number)?;
    let key = ctx.unlock(ask_remember)?;

    let entries = ctx.manager.entries(&key)?;
    let current = entries
        .get(index)
        .ok_or(PassVaultError::EntryNotFound(index))?;

    let service = match args.service {
        Some(s) => s.to_string(),
        None => prompt_field("Service", Some(&current.service))?,
    };
    let username = match args.username {
        Some(u) => u.to_string(),
        None => prompt_field("Username", Some(&current.username))?,
    };
    let password = if args.generate {
        let generated = generator::generate(&ctx.settings.password_policy())?;
        output::info(&format!("Generated password: {generated}"));
        generated
    } else if let Some(p) = args.password {
        p.to_string()
    } else {
        let typed = dialoguer::Password::new()
            .with_prompt("New password (leave empty to keep)")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
        if typed.is_empty() {
            current.password.clone()
        } else {
            typed
        }
    };

    ctx.manager
        .edit_entry(&key, index, CredentialRecord::new(service, username, password))?;

    output::success(&format!("Entry #{} updated", args.number));
    Ok(())
}
