//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - The `CredentialRecord` type (`record`)
//! - The text encoding of the record list (`codec`)
//! - Encrypted load/save of the vault file (`store`)
//! - The `PasswordManager` facade for unlocking and editing entries (`manager`)

pub mod codec;
pub mod manager;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use manager::PasswordManager;
pub use record::CredentialRecord;
pub use store::VaultStore;
