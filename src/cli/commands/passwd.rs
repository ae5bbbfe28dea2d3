//! `passvault passwd` — change the master password.
//!
//! Verifies the current password, re-encrypts every entry under the new
//! one with a fresh salt and nonce, and replaces the master record.

use crate::cli::output;
use crate::cli::{
    password_from_env, prompt_new_password, prompt_password, Cli, Context, PASSWORD_ENV,
};
use crate::errors::{PassVaultError, Result};

/// Execute the `passwd` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::open(cli)?;
    run(&ctx)
}

/// Change the master password using an already opened context.
pub fn run(ctx: &Context) -> Result<()> {
    if !ctx.manager.is_enrolled() {
        return Err(PassVaultError::NotEnrolled);
    }

    // The env var would otherwise silently become the new password.
    if password_from_env().is_some() {
        return Err(PassVaultError::CommandFailed(format!(
            "`passwd` is interactive only; unset {PASSWORD_ENV} and try again"
        )));
    }

    // 1. Always ask for the current password, even inside a session.
    output::info("Enter your current master password.");
    let old_password = prompt_password("Current master password")?;

    // 2. Prompt for the new password.
    output::info("Choose your new master password.");
    let new_password = prompt_new_password()?;

    // 3. Re-encrypt and swap the master record.
    let key = ctx
        .manager
        .change_master_password(&old_password, &new_password)?;
    let count = ctx.manager.entries(&key)?.len();

    output::success(&format!(
        "Master password changed ({count} entries re-encrypted)"
    ));

    Ok(())
}
