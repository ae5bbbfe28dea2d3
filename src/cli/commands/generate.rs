//! `passvault generate` — print a random password.

use crate::cli::{Cli, Context};
use crate::errors::Result;
use crate::generator::{self, PasswordPolicy};

/// Flags of the `generate` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateArgs {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
}

impl GenerateArgs {
    /// Apply the flags on top of the configured policy.
    pub fn policy(&self, base: PasswordPolicy) -> PasswordPolicy {
        PasswordPolicy {
            length: self.length.unwrap_or(base.length),
            uppercase: base.uppercase && !self.no_uppercase,
            lowercase: base.lowercase && !self.no_lowercase,
            digits: base.digits && !self.no_digits,
            symbols: base.symbols && !self.no_symbols,
        }
    }
}

/// Execute the `generate` command.
pub fn execute(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let ctx = Context::open(cli)?;
    run(&ctx, args)
}

/// Generate a password using an already opened context.
pub fn run(ctx: &Context, args: &GenerateArgs) -> Result<()> {
    let policy = args.policy(ctx.settings.password_policy());
    let password = generator::generate(&policy)?;
    println!("{password}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_base_policy() {
        let args = GenerateArgs {
            length: Some(8),
            no_symbols: true,
            ..GenerateArgs::default()
        };
        let policy = args.policy(PasswordPolicy::default());
        assert_eq!(policy.length, 8);
        assert!(!policy.symbols);
        assert!(policy.uppercase);
    }

    #[test]
    fn flags_cannot_re_enable_a_group() {
        let base = PasswordPolicy {
            symbols: false,
            ..PasswordPolicy::default()
        };
        assert!(!GenerateArgs::default().policy(base).symbols);
    }
}
