//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM vault container encryption and decryption (`encryption`)
//! - The zeroizing `MasterPassword` wrapper (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, VaultContainer};
pub use kdf::{derive_key, derive_key_256, generate_salt};
pub use keys::MasterPassword;
