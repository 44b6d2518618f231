//! Node key material
//!
//! Each node owns one RSA-2048 key pair plus one shared symmetric key/IV
//! pair, generated at startup and immutable for the node's lifetime. The
//! public key travels between nodes as PEM-wrapped SubjectPublicKeyInfo;
//! everything else stays on the node.

use crate::digest::DIGEST_SIZE;
use crate::error::{CryptoError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::pkcs8::{
    DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding,
};
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// =============================================================================
// SIZES
// =============================================================================

/// RSA modulus size in bits for node key pairs
pub const RSA_MODULUS_BITS: usize = 2048;
/// Symmetric cipher key size in bytes (AES-256)
pub const SYMMETRIC_KEY_SIZE: usize = 32;
/// Symmetric cipher initialization vector size in bytes
pub const IV_SIZE: usize = 16;
/// Byte length of the `key || iv` form carried by session-key wrapping
pub const SYMMETRIC_MATERIAL_SIZE: usize = SYMMETRIC_KEY_SIZE + IV_SIZE;

// =============================================================================
// FINGERPRINTS
// =============================================================================

/// SHA-256 of a public key's DER-encoded SubjectPublicKeyInfo
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KeyFingerprint(pub [u8; DIGEST_SIZE]);

impl KeyFingerprint {
    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Abbreviated form for log lines
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl std::fmt::Display for KeyFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

fn fingerprint_spki(key: &RsaPublicKey) -> Result<KeyFingerprint> {
    let der = key
        .to_public_key_der()
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    Ok(KeyFingerprint(Sha256::digest(der.as_bytes()).into()))
}

// =============================================================================
// PEER PUBLIC KEYS
// =============================================================================

/// A peer's RSA public key, imported from its exported SPKI form.
///
/// This is the only key type a node ever holds for another node; it can be
/// encrypted to and verified against, never used to decrypt or sign.
#[derive(Clone, Debug, PartialEq)]
pub struct PeerPublicKey(RsaPublicKey);

impl PeerPublicKey {
    /// Parse from PEM-wrapped SubjectPublicKeyInfo
    pub fn from_pem(pem: &str) -> Result<Self> {
        RsaPublicKey::from_public_key_pem(pem)
            .map(Self)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }

    /// Parse from DER-encoded SubjectPublicKeyInfo
    pub fn from_der(der: &[u8]) -> Result<Self> {
        RsaPublicKey::from_public_key_der(der)
            .map(Self)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }

    /// Re-export as PEM-wrapped SubjectPublicKeyInfo
    pub fn to_pem(&self) -> Result<String> {
        self.0
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }

    /// Fingerprint of the exported form
    pub fn fingerprint(&self) -> Result<KeyFingerprint> {
        fingerprint_spki(&self.0)
    }

    pub(crate) fn as_rsa(&self) -> &RsaPublicKey {
        &self.0
    }
}

// =============================================================================
// SYMMETRIC MATERIAL
// =============================================================================

/// Shared-secret material for the bulk cipher: an AES-256 key and a fixed
/// initialization vector. Constant for the life of a cipher session; both
/// sides of a session must hold identical material.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKeyMaterial {
    key: [u8; SYMMETRIC_KEY_SIZE],
    iv: [u8; IV_SIZE],
}

impl SymmetricKeyMaterial {
    /// Draw fresh key and IV from the OS secure random source
    pub fn generate() -> Self {
        let mut key = [0u8; SYMMETRIC_KEY_SIZE];
        let mut iv = [0u8; IV_SIZE];
        OsRng.fill_bytes(&mut key);
        OsRng.fill_bytes(&mut iv);
        Self { key, iv }
    }

    /// Rebuild material from the `key || iv` form produced by [`Self::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SYMMETRIC_MATERIAL_SIZE {
            return Err(CryptoError::InvalidKey(format!(
                "symmetric material must be {SYMMETRIC_MATERIAL_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let mut key = [0u8; SYMMETRIC_KEY_SIZE];
        let mut iv = [0u8; IV_SIZE];
        key.copy_from_slice(&bytes[..SYMMETRIC_KEY_SIZE]);
        iv.copy_from_slice(&bytes[SYMMETRIC_KEY_SIZE..]);
        Ok(Self { key, iv })
    }

    /// Serialize as `key || iv`, the payload of session-key wrapping
    pub fn to_bytes(&self) -> Zeroizing<[u8; SYMMETRIC_MATERIAL_SIZE]> {
        let mut out = Zeroizing::new([0u8; SYMMETRIC_MATERIAL_SIZE]);
        out[..SYMMETRIC_KEY_SIZE].copy_from_slice(&self.key);
        out[SYMMETRIC_KEY_SIZE..].copy_from_slice(&self.iv);
        out
    }

    pub(crate) fn key(&self) -> &[u8; SYMMETRIC_KEY_SIZE] {
        &self.key
    }

    pub(crate) fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }
}

// =============================================================================
// ASYMMETRIC PAIR
// =============================================================================

/// One node's RSA pair. The private half never leaves the owning node.
pub struct AsymmetricKeyPair {
    pub(crate) private_key: RsaPrivateKey,
    pub(crate) public_key: RsaPublicKey,
}

impl AsymmetricKeyPair {
    /// Generate a fresh RSA-2048 pair with public exponent 65537
    pub fn generate() -> Result<Self> {
        let private_key = RsaPrivateKey::new(&mut OsRng, RSA_MODULUS_BITS)
            .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
        Ok(Self::from_private_key(private_key))
    }

    /// Wrap an existing private key, deriving its public half
    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        let public_key = private_key.to_public_key();
        Self {
            private_key,
            public_key,
        }
    }

    /// Export the public key as PEM-wrapped SubjectPublicKeyInfo
    pub fn export_public_key(&self) -> Result<String> {
        self.public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }

    /// Export the public key as DER-encoded SubjectPublicKeyInfo
    pub fn export_public_key_der(&self) -> Result<Vec<u8>> {
        self.public_key
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }
}

// =============================================================================
// KEY MATERIAL
// =============================================================================

/// Cryptographic key state owned by one node.
///
/// Immutable once constructed: rebinding the symmetric half goes through
/// [`Self::with_symmetric`], which produces a new value.
pub struct KeyMaterial {
    pub(crate) asymmetric: AsymmetricKeyPair,
    pub(crate) symmetric: SymmetricKeyMaterial,
}

impl KeyMaterial {
    /// Generate fresh key material for one node.
    ///
    /// The symmetric half is drawn independently per node, so two nodes that
    /// each called `generate` cannot read each other's symmetric
    /// ciphertexts until one adopts the other's material via session-key
    /// wrapping and [`Self::with_symmetric`].
    pub fn generate() -> Result<Self> {
        Ok(Self {
            asymmetric: AsymmetricKeyPair::generate()?,
            symmetric: SymmetricKeyMaterial::generate(),
        })
    }

    /// Export the public key as PEM-wrapped SubjectPublicKeyInfo, the
    /// interchange form peers parse with [`PeerPublicKey::from_pem`].
    /// Deterministic for a given key.
    pub fn export_public_key(&self) -> Result<String> {
        self.asymmetric.export_public_key()
    }

    /// Export the public key as DER-encoded SubjectPublicKeyInfo
    pub fn export_public_key_der(&self) -> Result<Vec<u8>> {
        self.asymmetric.export_public_key_der()
    }

    /// Fingerprint of the exported public key
    pub fn fingerprint(&self) -> Result<KeyFingerprint> {
        fingerprint_spki(&self.asymmetric.public_key)
    }

    /// Rebind to externally agreed symmetric material, keeping the
    /// asymmetric pair. Used after unwrapping a session key from a peer.
    pub fn with_symmetric(self, symmetric: SymmetricKeyMaterial) -> Self {
        Self {
            asymmetric: self.asymmetric,
            symmetric,
        }
    }

    /// Serialize the private key as PKCS#8 PEM for provisioning storage.
    /// Key files carry only the asymmetric pair.
    pub fn to_pkcs8_pem(&self) -> Result<Zeroizing<String>> {
        self.asymmetric
            .private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }

    /// Load key material from a PKCS#8 private key PEM.
    ///
    /// The symmetric half is freshly generated: key files never carry it.
    pub fn from_pkcs8_pem(pem: &str) -> Result<Self> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(pem)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Ok(Self {
            asymmetric: AsymmetricKeyPair::from_private_key(private_key),
            symmetric: SymmetricKeyMaterial::generate(),
        })
    }
}
