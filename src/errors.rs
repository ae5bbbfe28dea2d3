use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Wrong master password, corrupted file, or tampering. These are
    /// reported identically on purpose.
    #[error("Decryption failed")]
    Authentication,

    // --- Record errors ---
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    // --- Master password errors ---
    #[error("No master password has been set up yet — run `passvault init`")]
    NotEnrolled,

    #[error("A master password is already set up (use `passvault passwd` to change it)")]
    AlreadyEnrolled,

    #[error("Wrong master password")]
    WrongMasterPassword,

    // --- Entry errors ---
    #[error("Entry #{} not found", .0.saturating_add(1))]
    EntryNotFound(usize),

    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),

    // --- Config errors ---
    #[error("Config error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_not_found_shows_one_based_number() {
        assert_eq!(PassVaultError::EntryNotFound(0).to_string(), "Entry #1 not found");
    }

    #[test]
    fn entry_not_found_at_max_index_does_not_overflow() {
        let shown = PassVaultError::EntryNotFound(usize::MAX).to_string();
        assert_eq!(shown, format!("Entry #{} not found", usize::MAX));
    }
}
