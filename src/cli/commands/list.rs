//! `passvault list` — display all entries in a table.

use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, show: bool) -> Result<()> {
    let ctx = Context::open(cli)?;
    run(&ctx, show, false)
}

/// List entries using an already opened context.
pub fn run(ctx: &Context, show: bool, ask_remember: bool) -> Result<()> {
    let key = ctx.unlock(ask_remember)?;
    let entries = ctx.manager.entries(&key)?;

    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    output::info(&format!("{} {noun}", entries.len()));
    output::print_entries_table(&entries, ctx.settings.mask_passwords && !show);

    Ok(())
}
