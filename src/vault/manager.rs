//! High-level password manager operations used by CLI commands.
//!
//! `PasswordManager` ties the master gate, the session cache and the
//! vault store together.  Callers first obtain a `MasterPassword` through
//! `resume`, `login` or `setup`, then pass it to the entry operations.
//!
//! Every mutation loads the full list, changes it in memory, and saves
//! the full list again.

use crate::auth::{Clock, MasterGate, SessionCache, SystemClock};
use crate::config::VaultPaths;
use crate::crypto::MasterPassword;
use crate::errors::{PassVaultError, Result};

use super::record::CredentialRecord;
use super::store::VaultStore;

/// The main manager handle.
pub struct PasswordManager<C: Clock = SystemClock> {
    gate: MasterGate,
    store: VaultStore,
    session: SessionCache<C>,
}

impl PasswordManager<SystemClock> {
    /// Manager over the files in `paths`, using wall-clock time.
    pub fn open(paths: &VaultPaths) -> Self {
        Self::with_clock(paths, SystemClock)
    }
}

impl<C: Clock> PasswordManager<C> {
    /// Manager over the files in `paths` whose session cache uses `clock`.
    pub fn with_clock(paths: &VaultPaths, clock: C) -> Self {
        Self {
            gate: MasterGate::new(paths.master_record()),
            store: VaultStore::new(paths.vault_file()),
            session: SessionCache::with_clock(clock),
        }
    }

    pub fn gate(&self) -> &MasterGate {
        &self.gate
    }

    pub fn store(&self) -> &VaultStore {
        &self.store
    }

    // ------------------------------------------------------------------
    // Unlocking
    // ------------------------------------------------------------------

    pub fn is_enrolled(&self) -> bool {
        self.gate.is_enrolled()
    }

    /// Reuse a recent unlock, if there is one.
    ///
    /// Returns `None` when nothing is enrolled, so a stale cache can never
    /// outlive a deleted master record.
    pub fn resume(&self) -> Option<MasterPassword> {
        if !self.gate.is_enrolled() {
            return None;
        }
        self.session.try_reuse()
    }

    /// First-time setup: enroll `password` and remember the session.
    pub fn setup(&self, password: &str) -> Result<MasterPassword> {
        if password.is_empty() {
            return Err(PassVaultError::EmptyField("master password"));
        }

        self.gate.enroll(password)?;
        let key = MasterPassword::new(password);
        self.session.remember(&key);
        Ok(key)
    }

    /// Verify `password` against the enrolled master password.
    ///
    /// The session is only remembered when `remember` is set.
    pub fn login(&self, password: &str, remember: bool) -> Result<MasterPassword> {
        if !self.gate.is_enrolled() {
            return Err(PassVaultError::NotEnrolled);
        }
        if !self.gate.verify(password)? {
            tracing::info!("master password rejected");
            return Err(PassVaultError::WrongMasterPassword);
        }

        let key = MasterPassword::new(password);
        if remember {
            self.session.remember(&key);
        }
        Ok(key)
    }

    /// Forget the remembered unlock right away.
    pub fn lock(&self) {
        self.session.forget();
    }

    /// Replace the master password and re-encrypt the vault under it.
    ///
    /// The old password must verify.  All entries are loaded with the old
    /// password before the new one is enrolled, then saved with the new
    /// one.  If that save fails the previous master record is put back,
    /// so the old password keeps opening the untouched vault.
    pub fn change_master_password(&self, old: &str, new: &str) -> Result<MasterPassword> {
        if new.is_empty() {
            return Err(PassVaultError::EmptyField("new master password"));
        }
        if !self.gate.verify(old)? {
            return Err(PassVaultError::WrongMasterPassword);
        }

        let records = self.store.load(old)?;
        let previous = self.gate.snapshot()?;
        self.gate.enroll(new)?;
        if let Err(e) = self.store.save(&records, new) {
            tracing::warn!(error = %e, "re-encryption failed, restoring previous master record");
            self.gate.restore(&previous)?;
            return Err(e);
        }

        let key = MasterPassword::new(new);
        self.session.remember(&key);
        tracing::info!(entries = records.len(), "master password changed");
        Ok(key)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// All entries, in stored order.
    pub fn entries(&self, key: &MasterPassword) -> Result<Vec<CredentialRecord>> {
        self.store.load(key.as_str())
    }

    /// Append `record` and return its index.
    pub fn add_entry(&self, key: &MasterPassword, record: CredentialRecord) -> Result<usize> {
        Self::validate(&record)?;

        let mut records = self.store.load(key.as_str())?;
        records.push(record);
        self.store.save(&records, key.as_str())?;
        Ok(records.len() - 1)
    }

    /// Replace the entry at `index`.
    pub fn edit_entry(
        &self,
        key: &MasterPassword,
        index: usize,
        record: CredentialRecord,
    ) -> Result<()> {
        Self::validate(&record)?;

        let mut records = self.store.load(key.as_str())?;
        let slot = records
            .get_mut(index)
            .ok_or(PassVaultError::EntryNotFound(index))?;
        *slot = record;
        self.store.save(&records, key.as_str())
    }

    /// Remove the entry at `index` and return it.
    pub fn delete_entry(&self, key: &MasterPassword, index: usize) -> Result<CredentialRecord> {
        let mut records = self.store.load(key.as_str())?;
        if index >= records.len() {
            return Err(PassVaultError::EntryNotFound(index));
        }
        let removed = records.remove(index);
        self.store.save(&records, key.as_str())?;
        Ok(removed)
    }

    fn validate(record: &CredentialRecord) -> Result<()> {
        match record.first_empty_field() {
            Some(field) => Err(PassVaultError::EmptyField(field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, PasswordManager) {
        let dir = TempDir::new().unwrap();
        let manager = PasswordManager::open(&VaultPaths::new(dir.path()));
        (dir, manager)
    }

    #[test]
    fn setup_rejects_empty_password() {
        let (_dir, m) = manager();
        assert!(matches!(
            m.setup(""),
            Err(PassVaultError::EmptyField(_))
        ));
        assert!(!m.is_enrolled());
    }

    #[test]
    fn login_before_setup_is_not_enrolled() {
        let (_dir, m) = manager();
        assert!(matches!(
            m.login("x", false),
            Err(PassVaultError::NotEnrolled)
        ));
        assert!(m.resume().is_none());
    }

    #[test]
    fn add_rejects_empty_fields() {
        let (_dir, m) = manager();
        let key = MasterPassword::new("k");
        let err = m
            .add_entry(&key, CredentialRecord::new("svc", "", "pw"))
            .unwrap_err();
        assert!(matches!(err, PassVaultError::EmptyField("username")));
    }
}
