//! Authenticated envelopes for small payloads
//!
//! Sealing derives a dedicated ChaCha20-Poly1305 key from the node's
//! symmetric key via HKDF-SHA256, so envelope traffic never reuses the bulk
//! cipher's key bytes. An envelope is `nonce || ciphertext+tag` with the
//! caller's associated data bound into the tag.
//!
//! [`crate::cipher::CipherEngine::seal`] is the usual entry point; the
//! functions here take a raw key for callers that manage their own material.

use crate::error::{CryptoError, Result};
use crate::keys::SYMMETRIC_KEY_SIZE;
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    ChaCha20Poly1305, Nonce,
};
use hkdf::Hkdf;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

/// Envelope nonce size in bytes (ChaCha20-Poly1305)
pub const NONCE_SIZE: usize = 12;
/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// HKDF info string separating the sealing key from the bulk cipher key
const SEALING_INFO: &[u8] = b"vitalmesh-sealing-v1";

fn derive_sealing_key(symmetric_key: &[u8; SYMMETRIC_KEY_SIZE]) -> Result<[u8; 32]> {
    let hkdf = Hkdf::<Sha256>::new(None, symmetric_key);
    let mut sealing_key = [0u8; 32];
    hkdf.expand(SEALING_INFO, &mut sealing_key)
        .map_err(|_| CryptoError::Seal)?;
    Ok(sealing_key)
}

/// Seal `plaintext` under a key derived from `symmetric_key`, binding
/// `associated_data` into the authentication tag.
///
/// Output is `nonce || ciphertext+tag`, `NONCE_SIZE + len + TAG_SIZE` bytes.
pub fn seal(
    symmetric_key: &[u8; SYMMETRIC_KEY_SIZE],
    plaintext: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let sealing_key = derive_sealing_key(symmetric_key)?;
    let cipher = ChaCha20Poly1305::new_from_slice(&sealing_key).map_err(|_| CryptoError::Seal)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce_bytes),
            Payload {
                msg: plaintext,
                aad: associated_data,
            },
        )
        .map_err(|_| CryptoError::Seal)?;

    let mut envelope = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Open an envelope produced by [`seal`].
///
/// Failures report only [`CryptoError::Unseal`], whether the envelope was
/// truncated, tampered with, sealed under another key, or bound to other
/// associated data.
pub fn open(
    symmetric_key: &[u8; SYMMETRIC_KEY_SIZE],
    envelope: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    if envelope.len() < NONCE_SIZE + TAG_SIZE {
        return Err(CryptoError::Unseal);
    }
    let (nonce_bytes, ciphertext) = envelope.split_at(NONCE_SIZE);
    let sealing_key = derive_sealing_key(symmetric_key)?;
    let cipher = ChaCha20Poly1305::new_from_slice(&sealing_key).map_err(|_| CryptoError::Unseal)?;

    cipher
        .decrypt(
            Nonce::from_slice(nonce_bytes),
            Payload {
                msg: ciphertext,
                aad: associated_data,
            },
        )
        .map_err(|_| CryptoError::Unseal)
}
