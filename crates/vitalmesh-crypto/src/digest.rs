//! SHA-256 content hashing
//!
//! Integrity checking only; a digest proves content equality, not
//! authenticity. Use [`crate::cipher::CipherEngine::sign`] when the producer
//! must be verifiable.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Digest output size in bytes (SHA-256)
pub const DIGEST_SIZE: usize = 32;

/// SHA-256 digest of a payload
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContentDigest(pub [u8; DIGEST_SIZE]);

impl ContentDigest {
    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Compute the SHA-256 digest of arbitrary payload bytes.
pub fn sha256(data: &[u8]) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    ContentDigest(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let d1 = sha256(b"spo2=97");
        let d2 = sha256(b"spo2=97");
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_digest_distinguishes_content() {
        assert_ne!(sha256(b"spo2=97"), sha256(b"spo2=98"));
    }

    #[test]
    fn test_digest_display_is_full_hex() {
        let d = sha256(b"");
        assert_eq!(d.to_string().len(), DIGEST_SIZE * 2);
        assert_eq!(d.to_string(), hex::encode(d.as_bytes()));
    }
}
