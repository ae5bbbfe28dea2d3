//! `passvault add` — append an entry to the vault.

use crate::cli::output;
use crate::cli::{prompt_field, Cli, Context};
use crate::errors::{PassVaultError, Result};
use crate::generator;
use crate::vault::CredentialRecord;

/// Arguments of the `add` command; missing fields are prompted for.
#[derive(Debug, Default)]
pub struct AddArgs<'a> {
    pub service: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub generate: bool,
}

/// Execute the `add` command.
pub fn execute(cli: &Cli, args: &AddArgs<'_>) -> Result<()> {
    let ctx = Context::open(cli)?;
    run(&ctx, args, false)
}

/// Add an entry using an already opened context.
pub fn run(ctx: &Context, args: &AddArgs<'_>, ask_remember: bool) -> Result<()> {
    // Unlock first so a wrong master password fails before any typing.
    let key = ctx.unlock(ask_remember)?;

    let service = match args.service {
        Some(s) => s.to_string(),
        None => prompt_field("Service", None)?,
    };
    let username = match args.username {
        Some(u) => u.to_string(),
        None => prompt_field("Username", None)?,
    };
    let password = if args.generate {
        let generated = generator::generate(&ctx.settings.password_policy())?;
        output::info(&format!("Generated password: {generated}"));
        generated
    } else if let Some(p) = args.password {
        output::warning("Password provided on command line — it may appear in shell history.");
        p.to_string()
    } else {
        dialoguer::Password::new()
            .with_prompt(format!("Password for {service}"))
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?
    };

    let record = CredentialRecord::new(service, username, password);
    let index = ctx.manager.add_entry(&key, record)?;

    output::success(&format!("Entry #{} added", index + 1));
    Ok(())
}
