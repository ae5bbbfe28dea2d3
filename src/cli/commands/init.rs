//! `passvault init` — set up the master password.

use crate::cli::output;
use crate::cli::{prompt_new_password, Cli, Context};
use crate::errors::{PassVaultError, Result};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::open(cli)?;

    // 1. Refuse to silently replace an existing master password.
    if ctx.manager.is_enrolled() {
        output::tip("Use `passvault passwd` to change the master password.");
        return Err(PassVaultError::AlreadyEnrolled);
    }

    // 2. Prompt for a new password (with confirmation) and enroll it.
    let password = prompt_new_password()?;
    ctx.manager.setup(&password)?;

    output::success(&format!(
        "Master password set up in {}",
        ctx.paths.root().display()
    ));

    // 3. Show helpful tips.
    output::tip("Run `passvault add <service> <username>` to add an entry.");
    output::tip("Run `passvault list` to see all entries.");

    Ok(())
}
