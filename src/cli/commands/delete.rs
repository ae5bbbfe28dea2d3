//! `passvault delete` — remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{entry_index, Cli, Context};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, number: usize, force: bool) -> Result<()> {
    let ctx = Context::open(cli)?;
    run(&ctx, number, force, false)
}

/// Delete an entry using an already opened context.
pub fn run(ctx: &Context, number: usize, force: bool, ask_remember: bool) -> Result<()> {
    let index = entry_index(number)?;
    let key = ctx.unlock(ask_remember)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let entries = ctx.manager.entries(&key)?;
        let entry = entries
            .get(index)
            .ok_or(PassVaultError::EntryNotFound(index))?;

        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete entry #{number} ({} / {})?",
                entry.service, entry.username
            ))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let removed = ctx.manager.delete_entry(&key, index)?;
    output::success(&format!(
        "Deleted entry #{number} ({} / {})",
        removed.service, removed.username
    ));

    Ok(())
}
