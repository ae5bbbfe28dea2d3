//! Integration tests for the PassVault crypto module.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use passvault::crypto::{decrypt, derive_key, encrypt, generate_salt, VaultContainer};
use passvault::errors::PassVaultError;

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let plaintext = r#"[{"service":"github","username":"alice","password":"p@ss"}]"#;

    let blob = encrypt(plaintext, "master-pw").expect("encrypt should succeed");
    let recovered = decrypt(&blob, "master-pw").expect("decrypt should succeed");

    assert_eq!(recovered, plaintext);
}

#[test]
fn encrypt_produces_fresh_nonce_and_salt_each_time() {
    let a = encrypt("same plaintext", "same-pw").expect("encrypt 1");
    let b = encrypt("same plaintext", "same-pw").expect("encrypt 2");
    assert_ne!(a, b, "two encryptions of the same plaintext must differ");

    let ca = VaultContainer::from_base64(&a).unwrap();
    let cb = VaultContainer::from_base64(&b).unwrap();
    assert_ne!(ca.nonce, cb.nonce, "nonce must never repeat");
    assert_ne!(ca.salt, cb.salt, "salt must never repeat");
}

#[test]
fn decrypt_with_wrong_password_fails_with_authentication_error() {
    let blob = encrypt("TOP_SECRET=42", "right").expect("encrypt");
    let result = decrypt(&blob, "wrong");

    assert!(matches!(result, Err(PassVaultError::Authentication)));
}

#[test]
fn decrypt_with_truncated_data_fails() {
    let blob = encrypt("VALUE=abc", "pw").expect("encrypt");
    let mut raw = BASE64.decode(&blob).unwrap();
    raw.pop();
    let truncated = BASE64.encode(&raw);

    assert!(matches!(
        decrypt(&truncated, "pw"),
        Err(PassVaultError::Authentication)
    ));
}

#[test]
fn decrypt_with_flipped_bit_fails() {
    let blob = encrypt("VALUE=abc", "pw").expect("encrypt");
    let mut raw = BASE64.decode(&blob).unwrap();
    // Flip a bit in the ciphertext (after nonce and salt).
    raw[12 + 16 + 2] ^= 0x01;
    let tampered = BASE64.encode(&raw);

    assert!(matches!(
        decrypt(&tampered, "pw"),
        Err(PassVaultError::Authentication)
    ));
}

#[test]
fn decrypt_with_tampered_salt_fails() {
    let blob = encrypt("VALUE=abc", "pw").expect("encrypt");
    let mut container = VaultContainer::from_base64(&blob).unwrap();
    container.salt[0] ^= 0xFF;

    assert!(matches!(
        decrypt(&container.to_base64(), "pw"),
        Err(PassVaultError::Authentication)
    ));
}

#[test]
fn decrypt_empty_plaintext_roundtrip() {
    let blob = encrypt("", "pw").unwrap();
    assert_eq!(decrypt(&blob, "pw").unwrap(), "");
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt();

    let key1 = derive_key("my-secure-passphrase", &salt, 256).expect("derive 1");
    let key2 = derive_key("my-secure-passphrase", &salt, 256).expect("derive 2");

    assert_eq!(key1, key2, "same password + salt must produce the same key");
    assert_eq!(key1.len(), 32);
}

#[test]
fn derive_key_different_salts_different_keys() {
    let key1 = derive_key("same-password", &generate_salt(), 256).expect("derive 1");
    let key2 = derive_key("same-password", &generate_salt(), 256).expect("derive 2");

    assert_ne!(key1, key2, "different salts must produce different keys");
}

#[test]
fn derive_key_different_passwords_different_keys() {
    let salt = generate_salt();

    let key1 = derive_key("password-one", &salt, 256).expect("derive 1");
    let key2 = derive_key("password-two", &salt, 256).expect("derive 2");

    assert_ne!(key1, key2, "different passwords must produce different keys");
}
