//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::{Settings, VaultPaths};
use crate::crypto::MasterPassword;
use crate::errors::{PassVaultError, Result};
use crate::vault::PasswordManager;

/// Minimum length for a newly chosen master password.
const MIN_PASSWORD_LEN: usize = 8;

/// Environment variable that supplies the master password non-interactively.
pub const PASSWORD_ENV: &str = "PASSVAULT_PASSWORD";

/// PassVault CLI: master-password protected credential vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Master-password protected credential vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (default: <config dir>/PasswordGenerator)
    #[arg(long, env = "PASSVAULT_DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Set up the master password
    Init,

    /// Add an entry (missing fields are prompted for)
    Add {
        /// Service or site name
        service: Option<String>,
        /// Account user name
        username: Option<String>,
        /// Password (omit for interactive prompt)
        password: Option<String>,
        /// Generate the password instead of asking for it
        #[arg(short, long, conflicts_with = "password")]
        generate: bool,
    },

    /// List all entries
    List {
        /// Show passwords in clear text
        #[arg(long)]
        show: bool,
    },

    /// Edit an entry by number
    Edit {
        /// Entry number as shown by `list`
        number: usize,
        /// New service name
        #[arg(long)]
        service: Option<String>,
        /// New user name
        #[arg(long)]
        username: Option<String>,
        /// New password
        #[arg(long)]
        password: Option<String>,
        /// Generate a new password
        #[arg(short, long, conflicts_with = "password")]
        generate: bool,
    },

    /// Delete an entry by number
    Delete {
        /// Entry number as shown by `list`
        number: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Change the master password
    Passwd,

    /// Generate a random password
    Generate {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,
        /// Leave out A-Z
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out a-z
        #[arg(long)]
        no_lowercase: bool,
        /// Leave out 0-9
        #[arg(long)]
        no_digits: bool,
        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Show where the vault lives and whether it is set up
    Status,

    /// Interactive session that keeps the vault unlocked for a few minutes
    Shell,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Everything a command needs: file locations, settings and the manager.
pub struct Context {
    pub paths: VaultPaths,
    pub settings: Settings,
    pub manager: PasswordManager,
}

impl Context {
    /// Resolve the data directory and load settings.
    pub fn open(cli: &Cli) -> Result<Self> {
        let paths = VaultPaths::resolve(cli.data_dir.as_deref())?;
        let settings = Settings::load(paths.root())?;
        let manager = PasswordManager::open(&paths);
        Ok(Self {
            paths,
            settings,
            manager,
        })
    }

    /// Get the master password for a vault operation, trying in order:
    /// 1. A still-valid remembered session
    /// 2. `PASSVAULT_PASSWORD` env var
    /// 3. Interactive prompt
    pub fn unlock(&self, ask_remember: bool) -> Result<MasterPassword> {
        if let Some(key) = self.manager.resume() {
            tracing::debug!("reusing remembered session");
            return Ok(key);
        }
        if !self.manager.is_enrolled() {
            return Err(PassVaultError::NotEnrolled);
        }

        if let Some(pw) = password_from_env() {
            return self.manager.login(&pw, true);
        }

        let pw = prompt_password("Enter master password")?;
        let remember = if ask_remember {
            dialoguer::Confirm::new()
                .with_prompt("Remember me for 5 minutes?")
                .default(true)
                .interact()
                .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?
        } else {
            true
        };
        self.manager.login(&pw, remember)
    }
}

pub(crate) fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Prompt for an existing password.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation.
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage.
/// Enforces a minimum password length.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        check_new_password(&pw)?;
        return Ok(pw);
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if let Err(e) = check_new_password(&password) {
            output::warning(&format!("{e}. Try again."));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Validate a newly chosen master password.
pub fn check_new_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PassVaultError::CommandFailed(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Prompt for a plain text field, optionally pre-filled.
pub fn prompt_field(prompt: &str, initial: Option<&str>) -> Result<String> {
    let mut input = dialoguer::Input::<String>::new().with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.default(initial.to_string());
    }
    input
        .interact_text()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))
}

/// Convert a 1-based entry number from the command line to an index.
pub fn entry_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| PassVaultError::CommandFailed("entry numbers start at 1".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_numbers_are_one_based() {
        assert_eq!(entry_index(1).unwrap(), 0);
        assert_eq!(entry_index(7).unwrap(), 6);
        assert!(entry_index(0).is_err());
    }

    #[test]
    fn new_password_length_is_enforced() {
        assert!(check_new_password("short").is_err());
        assert!(check_new_password("long enough").is_ok());
    }

    #[test]
    fn cli_parses_add_with_generate() {
        let cli = Cli::try_parse_from(["passvault", "add", "github", "alice", "--generate"]).unwrap();
        match cli.command {
            Commands::Add {
                service,
                username,
                password,
                generate,
            } => {
                assert_eq!(service.as_deref(), Some("github"));
                assert_eq!(username.as_deref(), Some("alice"));
                assert!(password.is_none());
                assert!(generate);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn cli_rejects_password_with_generate() {
        assert!(Cli::try_parse_from(["passvault", "add", "s", "u", "pw", "--generate"]).is_err());
    }
}
