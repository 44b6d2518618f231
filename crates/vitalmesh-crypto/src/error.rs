//! Error types for the VitalMesh security core

use thiserror::Error;

/// Result type alias using our CryptoError
pub type Result<T> = std::result::Result<T, CryptoError>;

/// VitalMesh security core error types
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Plaintext exceeds what one RSA-OAEP block can carry
    #[error("plaintext of {len} bytes exceeds the {max}-byte limit for asymmetric encryption")]
    Encoding { len: usize, max: usize },

    /// Asymmetric ciphertext rejected (wrong key, corruption, or tampering).
    /// Carries no cause detail.
    #[error("asymmetric decryption failed")]
    Decryption,

    /// Symmetric ciphertext length is not a multiple of the block size
    #[error("ciphertext length {0} is not a multiple of the cipher block size")]
    Format(usize),

    /// Recovered pad length byte is zero or exceeds the recovered plaintext
    #[error("invalid block padding")]
    Padding,

    /// Key bytes could not be parsed or had the wrong length
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    /// Asymmetric key pair generation failed
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Invalid signature
    #[error("invalid signature")]
    InvalidSignature,

    /// Envelope could not be sealed
    #[error("sealing failed")]
    Seal,

    /// Envelope rejected by authentication. Carries no cause detail.
    #[error("envelope failed authentication")]
    Unseal,
}
