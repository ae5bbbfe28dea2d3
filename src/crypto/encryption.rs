//! AES-256-GCM authenticated encryption of the vault payload.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and a
//! fresh 16-byte salt, derives the AES key from the master password and
//! that salt, and packs everything into one base64 string.
//!
//! Layout of the decoded container:
//!   [ 12-byte nonce | 16-byte salt | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use super::kdf::{derive_key_256, generate_salt, SALT_LEN};
use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// One complete encrypted snapshot, split into its three parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultContainer {
    pub nonce: [u8; NONCE_LEN],
    pub salt: [u8; SALT_LEN],
    /// Ciphertext with the auth tag appended.
    pub ciphertext: Vec<u8>,
}

impl VaultContainer {
    /// Encrypt `plaintext` under a key derived from `password` and a
    /// freshly generated salt and nonce.
    pub fn seal_bytes(plaintext: &[u8], password: &str) -> Result<Self> {
        let salt = generate_salt();
        let mut key = derive_key_256(password, &salt)?;

        let cipher = Aes256Gcm::new_from_slice(&key)
            .map_err(|e| PassVaultError::Crypto(format!("invalid key length: {e}")));
        key.zeroize();
        let cipher = cipher?;

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| PassVaultError::Crypto(format!("encryption error: {e}")))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        nonce_bytes.copy_from_slice(&nonce);

        Ok(Self {
            nonce: nonce_bytes,
            salt,
            ciphertext,
        })
    }

    /// Re-derive the key from `password` and the stored salt, then
    /// decrypt and verify the auth tag.
    pub fn open_bytes(&self, password: &str) -> Result<Vec<u8>> {
        let mut key = derive_key_256(password, &self.salt)?;
        let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| PassVaultError::Authentication);
        key.zeroize();

        cipher?
            .decrypt(Nonce::from_slice(&self.nonce), self.ciphertext.as_slice())
            .map_err(|_| PassVaultError::Authentication)
    }

    /// Encode as `base64(nonce || salt || ciphertext)`.
    pub fn to_base64(&self) -> String {
        let mut buf = Vec::with_capacity(NONCE_LEN + SALT_LEN + self.ciphertext.len());
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.ciphertext);
        BASE64.encode(buf)
    }

    /// Decode a base64 container.  The split order must match `to_base64`:
    /// nonce first, then salt.
    ///
    /// Anything that cannot be a container is reported as an
    /// authentication failure, never as a more specific error.
    pub fn from_base64(blob: &str) -> Result<Self> {
        let data = BASE64
            .decode(blob.trim())
            .map_err(|_| PassVaultError::Authentication)?;

        if data.len() < NONCE_LEN + SALT_LEN + TAG_LEN {
            return Err(PassVaultError::Authentication);
        }

        let (nonce_bytes, rest) = data.split_at(NONCE_LEN);
        let (salt_bytes, ciphertext) = rest.split_at(SALT_LEN);

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(salt_bytes);

        Ok(Self {
            nonce,
            salt,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

/// Encrypt `plaintext` with a key derived from `password`.
///
/// Returns the base64 text that goes into the vault file.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    VaultContainer::seal_bytes(plaintext.as_bytes(), password).map(|c| c.to_base64())
}

/// Decrypt a base64 container produced by `encrypt`.
pub fn decrypt(blob: &str, password: &str) -> Result<String> {
    let container = VaultContainer::from_base64(blob)?;
    let plaintext = container.open_bytes(password)?;

    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        PassVaultError::Crypto("decrypted payload is not valid UTF-8".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_layout_is_nonce_then_salt() {
        let container = VaultContainer::seal_bytes(b"layout", "pw").unwrap();
        let raw = BASE64.decode(container.to_base64()).unwrap();

        assert_eq!(&raw[..NONCE_LEN], &container.nonce);
        assert_eq!(&raw[NONCE_LEN..NONCE_LEN + SALT_LEN], &container.salt);
        assert_eq!(raw.len(), NONCE_LEN + SALT_LEN + b"layout".len() + TAG_LEN);
    }

    #[test]
    fn from_base64_rejects_short_input_as_authentication_failure() {
        let short = BASE64.encode([0u8; NONCE_LEN + SALT_LEN]);
        assert!(matches!(
            VaultContainer::from_base64(&short),
            Err(PassVaultError::Authentication)
        ));
    }

    #[test]
    fn from_base64_rejects_garbage_as_authentication_failure() {
        assert!(matches!(
            VaultContainer::from_base64("not base64 at all!"),
            Err(PassVaultError::Authentication)
        ));
    }
}
