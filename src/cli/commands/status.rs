//! `passvault status` — show file locations and setup state.

use console::style;

use crate::cli::{Cli, Context};
use crate::errors::Result;

/// Execute the `status` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::open(cli)?;

    println!("passvault {}", env!("CARGO_PKG_VERSION"));
    println!("  data dir:      {}", ctx.paths.root().display());
    println!("  master record: {}", ctx.paths.master_record().display());
    println!("  vault file:    {}", ctx.paths.vault_file().display());

    let master = if ctx.manager.is_enrolled() {
        style("set up").green()
    } else {
        style("not set up").yellow()
    };
    let vault = if ctx.manager.store().exists() {
        style("present").green()
    } else {
        style("empty").dim()
    };
    println!("  master password: {master}");
    println!("  vault:           {vault}");

    Ok(())
}
