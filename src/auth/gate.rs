//! Master password enrollment and verification.
//!
//! The master record file holds a single line:
//!
//! ```text
//! base64(salt) ":" base64(PBKDF2-HMAC-SHA256(password, salt))
//! ```
//!
//! The password itself is never written anywhere.  A missing or empty
//! file means no master password has been set up yet.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use subtle::ConstantTimeEq;

use crate::crypto::kdf::{derive_key, generate_salt, KEY_LEN};
use crate::errors::{PassVaultError, Result};
use crate::files::write_atomic;

/// Salt and verification hash of the enrolled master password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterCredentialRecord {
    pub salt: Vec<u8>,
    pub verification_hash: Vec<u8>,
}

impl MasterCredentialRecord {
    /// Derive a fresh record for `password` with a new random salt.
    pub fn create(password: &str) -> Result<Self> {
        let salt = generate_salt();
        let verification_hash = derive_key(password, &salt, KEY_LEN * 8)?;
        Ok(Self {
            salt: salt.to_vec(),
            verification_hash,
        })
    }

    /// Recompute the hash for `candidate` and compare in constant time.
    pub fn matches(&self, candidate: &str) -> Result<bool> {
        let candidate_hash = derive_key(candidate, &self.salt, KEY_LEN * 8)?;
        Ok(candidate_hash
            .as_slice()
            .ct_eq(self.verification_hash.as_slice())
            .into())
    }

    /// Encode as `base64(salt):base64(hash)`.
    pub fn encode(&self) -> String {
        format!(
            "{}:{}",
            BASE64.encode(&self.salt),
            BASE64.encode(&self.verification_hash)
        )
    }

    /// Parse the on-disk form.  Exactly one `:` separator is required and
    /// both halves must be valid base64.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.trim();
        let mut parts = content.split(':');
        let (Some(salt_b64), Some(hash_b64), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(PassVaultError::MalformedRecord(
                "expected exactly one ':' separator".into(),
            ));
        };

        let salt = BASE64
            .decode(salt_b64)
            .map_err(|e| PassVaultError::MalformedRecord(format!("salt: {e}")))?;
        let verification_hash = BASE64
            .decode(hash_b64)
            .map_err(|e| PassVaultError::MalformedRecord(format!("hash: {e}")))?;

        Ok(Self {
            salt,
            verification_hash,
        })
    }
}

/// Owner of the master record file.
#[derive(Debug, Clone)]
pub struct MasterGate {
    path: PathBuf,
}

impl MasterGate {
    /// Gate backed by the record file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` iff the record file exists and is non-empty.
    pub fn is_enrolled(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    /// Set (or replace) the master password.
    ///
    /// Re-enrolling is allowed; the last write wins.  Callers that
    /// implement "change master password" verify the old one first.
    pub fn enroll(&self, password: &str) -> Result<()> {
        let record = MasterCredentialRecord::create(password)?;
        write_atomic(&self.path, record.encode().as_bytes())?;
        tracing::info!(path = %self.path.display(), "master password enrolled");
        Ok(())
    }

    /// Raw bytes of the current record file, for a later `restore`.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    /// Put back a record previously taken with `snapshot`.
    pub fn restore(&self, snapshot: &[u8]) -> Result<()> {
        write_atomic(&self.path, snapshot)?;
        tracing::info!(path = %self.path.display(), "master record restored");
        Ok(())
    }

    /// Check `candidate` against the enrolled master password.
    ///
    /// Returns `Ok(false)` when nothing is enrolled or the record file is
    /// malformed; only genuine I/O failures surface as errors.
    pub fn verify(&self, candidate: &str) -> Result<bool> {
        if !self.is_enrolled() {
            return Ok(false);
        }

        let bytes = fs::read(&self.path)?;
        let Ok(content) = String::from_utf8(bytes) else {
            tracing::warn!(path = %self.path.display(), "master record is not valid UTF-8");
            return Ok(false);
        };

        let record = match MasterCredentialRecord::parse(&content) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed master record");
                return Ok(false);
            }
        };

        record.matches(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn record_encode_parse_roundtrip() {
        let record = MasterCredentialRecord {
            salt: vec![1; 16],
            verification_hash: vec![2; 32],
        };
        let parsed = MasterCredentialRecord::parse(&record.encode()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn parse_rejects_wrong_separator_count() {
        assert!(MasterCredentialRecord::parse("abc").is_err());
        assert!(MasterCredentialRecord::parse("YQ==:Yg==:Yw==").is_err());
    }

    #[test]
    fn parse_rejects_invalid_base64() {
        assert!(MasterCredentialRecord::parse("!!!:Yg==").is_err());
        assert!(MasterCredentialRecord::parse("YQ==:***").is_err());
    }

    #[test]
    fn parse_tolerates_trailing_newline() {
        assert!(MasterCredentialRecord::parse("YQ==:Yg==\n").is_ok());
    }

    #[test]
    fn empty_file_is_not_enrolled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("master.config");
        fs::write(&path, "").unwrap();

        let gate = MasterGate::new(&path);
        assert!(!gate.is_enrolled());
        assert!(!gate.verify("anything").unwrap());
    }

    #[test]
    fn enrolled_record_has_expected_shape() {
        let dir = TempDir::new().unwrap();
        let gate = MasterGate::new(dir.path().join("nested").join("master.config"));
        gate.enroll("shape-check").unwrap();

        let content = fs::read_to_string(gate.path()).unwrap();
        let record = MasterCredentialRecord::parse(&content).unwrap();
        assert_eq!(record.salt.len(), 16);
        assert_eq!(record.verification_hash.len(), 32);
        assert!(!content.contains("shape-check"));
    }
}
