//! PKCS#7 block padding for the symmetric cipher
//!
//! Padding is always applied: block-aligned plaintext gains a full extra
//! block, so every ciphertext is strictly longer than its plaintext and a
//! pad length can always be recovered.

use crate::error::{CryptoError, Result};

/// Cipher block size in bytes (AES)
pub const BLOCK_SIZE: usize = 16;

/// Append PKCS#7 padding.
///
/// The output length is the next multiple of [`BLOCK_SIZE`] strictly greater
/// than the input length. Each pad byte holds the pad length (1..=16).
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - (data.len() % BLOCK_SIZE);
    let mut padded = data.to_vec();
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strip PKCS#7 padding in place.
///
/// Only the final length byte is range-checked; interior pad bytes are not
/// inspected. A decrypt under a mismatched key therefore usually surfaces as
/// garbage plaintext rather than an error here.
pub fn unpad(buf: &mut Vec<u8>) -> Result<()> {
    let pad_len = match buf.last() {
        Some(&b) => b as usize,
        None => return Err(CryptoError::Padding),
    };
    if pad_len == 0 || pad_len > buf.len() {
        return Err(CryptoError::Padding);
    }
    buf.truncate(buf.len() - pad_len);
    Ok(())
}
