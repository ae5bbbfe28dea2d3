//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The same derivation serves two purposes: the 256-bit AES key for the
//! vault file, and the 256-bit verification hash stored in the master
//! record.  The iteration count is fixed in code and is not stored next
//! to the salt, so changing it invalidates every existing record.

use hmac::Hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::errors::{PassVaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 65_536;

/// Derive `key_len_bits / 8` bytes from a password and salt.
///
/// `key_len_bits` must be a non-zero multiple of 8.
pub fn derive_key(password: &str, salt: &[u8], key_len_bits: usize) -> Result<Vec<u8>> {
    if key_len_bits == 0 || key_len_bits % 8 != 0 {
        return Err(PassVaultError::Crypto(format!(
            "key length must be a non-zero multiple of 8 bits (got {key_len_bits})"
        )));
    }

    let mut out = vec![0u8; key_len_bits / 8];
    derive_into(password.as_bytes(), salt, ITERATIONS, &mut out)?;
    Ok(out)
}

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt will always produce the same key.
pub fn derive_key_256(password: &str, salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    let mut key = [0u8; KEY_LEN];
    derive_into(password.as_bytes(), salt, ITERATIONS, &mut key)?;
    Ok(key)
}

fn derive_into(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) -> Result<()> {
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, rounds, out)
        .map_err(|e| PassVaultError::Crypto(format!("PBKDF2 failed: {e}")))
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_rfc7914_vector() {
        // PBKDF2-HMAC-SHA256, P = "passwd", S = "salt", c = 1, dkLen = 64.
        let mut out = [0u8; 64];
        derive_into(b"passwd", b"salt", 1, &mut out).unwrap();
        let head: [u8; 8] = [0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f];
        let tail: [u8; 8] = [0x09, 0x11, 0x20, 0x41, 0xd3, 0xa1, 0x97, 0x83];
        assert_eq!(&out[..8], &head);
        assert_eq!(&out[56..], &tail);
    }

    #[test]
    fn derive_key_honours_requested_length() {
        let salt = [7u8; SALT_LEN];
        assert_eq!(derive_key("pw", &salt, 256).unwrap().len(), 32);
        assert_eq!(derive_key("pw", &salt, 128).unwrap().len(), 16);
    }

    #[test]
    fn derive_key_rejects_odd_bit_lengths() {
        let salt = [7u8; SALT_LEN];
        assert!(derive_key("pw", &salt, 0).is_err());
        assert!(derive_key("pw", &salt, 100).is_err());
    }

    #[test]
    fn derive_key_and_derive_key_256_agree() {
        let salt = [3u8; SALT_LEN];
        let a = derive_key("agree", &salt, 256).unwrap();
        let b = derive_key_256("agree", &salt).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn generated_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }
}
