//! Random password generation.
//!
//! A password is built from the enabled character groups: one character
//! is drawn from every enabled group, the rest from the union of all of
//! them, and the result is shuffled so the guaranteed characters do not
//! sit at fixed positions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{PassVaultError, Result};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+<>?";

/// Which character groups to use and how long the password should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 20,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordPolicy {
    fn pools(&self) -> Vec<&'static [u8]> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, pool)| pool.as_bytes())
        .collect()
    }
}

/// Generate a password for `policy`.
///
/// The result is `max(policy.length, enabled groups)` characters long.
pub fn generate(policy: &PasswordPolicy) -> Result<String> {
    let pools = policy.pools();
    if pools.is_empty() {
        return Err(PassVaultError::Config(
            "select at least one character group".into(),
        ));
    }

    let all: Vec<u8> = pools.iter().flat_map(|pool| pool.iter().copied()).collect();
    let mut rng = rand::rng();

    let mut chars: Vec<u8> = pools
        .iter()
        .map(|pool| pool[rng.random_range(0..pool.len())])
        .collect();

    while chars.len() < policy.length {
        chars.push(all[rng.random_range(0..all.len())]);
    }

    chars.shuffle(&mut rng);

    // Every pool is ASCII.
    Ok(chars.into_iter().map(char::from).collect())
}
