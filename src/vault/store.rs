//! Encrypted vault persistence.
//!
//! `VaultStore` glues the record codec, the AES-GCM container and the
//! vault file together.  It keeps no decrypted state between calls: every
//! `load` reads and decrypts the whole file, every `save` re-encrypts the
//! whole list under a fresh salt and nonce and replaces the file.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use super::codec;
use super::record::CredentialRecord;
use crate::crypto::encryption::{decrypt, encrypt};
use crate::errors::{PassVaultError, Result};
use crate::files::write_atomic;

/// Handle on the vault file at a fixed path.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the `passwords.enc` file on disk.
    path: PathBuf,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the vault file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` if a non-empty vault file exists.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    /// Encrypt `records` under `password` and replace the vault file.
    ///
    /// An empty password is a no-op that reports success, so nothing is
    /// ever persisted without a key.  Encryption finishes before the file
    /// is touched and the write is atomic, so a failed save leaves the
    /// previous vault intact.
    pub fn save(&self, records: &[CredentialRecord], password: &str) -> Result<()> {
        if password.is_empty() {
            tracing::debug!("save skipped: no master password");
            return Ok(());
        }

        let mut payload = codec::serialize(records);
        let sealed = encrypt(&payload, password);
        payload.zeroize();
        let sealed = sealed?;

        write_atomic(&self.path, sealed.as_bytes())?;
        tracing::info!(
            path = %self.path.display(),
            entries = records.len(),
            "vault saved"
        );
        Ok(())
    }

    /// Read and decrypt the vault.
    ///
    /// Returns an empty list for an empty password, a missing file, or an
    /// empty file.  A wrong password or a damaged file is reported as
    /// `PassVaultError::Authentication`.
    pub fn load(&self, password: &str) -> Result<Vec<CredentialRecord>> {
        if password.is_empty() {
            tracing::debug!("load skipped: no master password");
            return Ok(Vec::new());
        }

        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no vault file yet");
            return Ok(Vec::new());
        }

        // Non-UTF-8 content cannot be a container; report it like any
        // other damage.
        let blob = String::from_utf8(fs::read(&self.path)?)
            .map_err(|_| PassVaultError::Authentication)?;
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut payload = decrypt(&blob, password)?;
        let records = codec::deserialize(&payload);
        payload.zeroize();

        tracing::debug!(entries = records.len(), "vault loaded");
        Ok(records)
    }
}
