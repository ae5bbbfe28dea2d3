//! The unlocked master password.
//!
//! The master password is never stored on disk, but once verified it is
//! the key material for every vault read and write.  `MasterPassword`
//! keeps it in a buffer that is wiped when dropped and hides it from
//! `Debug` output so it cannot end up in logs.

use std::fmt;

use zeroize::Zeroizing;

/// A verified master password, zeroized on drop.
#[derive(Clone)]
pub struct MasterPassword {
    inner: Zeroizing<String>,
}

impl MasterPassword {
    /// Wrap a raw password string.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(password.into()),
        }
    }

    /// Access the raw password (e.g. to pass to the vault store).
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl fmt::Debug for MasterPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterPassword(<redacted>)")
    }
}

impl PartialEq for MasterPassword {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.as_str().as_bytes().ct_eq(other.as_str().as_bytes()).into()
    }
}

impl Eq for MasterPassword {}
