//! VitalMesh Security Core
//!
//! This crate provides the per-node security helpers for the VitalMesh
//! monitoring mesh: key material, hybrid public-key/symmetric encryption,
//! detached signatures, and content hashing.
//!
//! # Modules
//!
//! - [`keys`]: Node key material (RSA pair, shared symmetric key/IV)
//! - [`cipher`]: Encrypt/decrypt/sign operations over key material
//! - [`padding`]: PKCS#7 block padding
//! - [`digest`]: SHA-256 content hashing
//! - [`sealed`]: Authenticated envelopes for small payloads
//! - [`error`]: Error types

pub mod cipher;
pub mod digest;
pub mod error;
pub mod keys;
pub mod padding;
pub mod sealed;

#[cfg(test)]
mod test_vectors;

pub use cipher::CipherEngine;
pub use digest::{sha256, ContentDigest, DIGEST_SIZE};
pub use error::{CryptoError, Result};
pub use keys::{
    KeyFingerprint, KeyMaterial, PeerPublicKey, SymmetricKeyMaterial, IV_SIZE, RSA_MODULUS_BITS,
    SYMMETRIC_KEY_SIZE, SYMMETRIC_MATERIAL_SIZE,
};
pub use padding::BLOCK_SIZE;
