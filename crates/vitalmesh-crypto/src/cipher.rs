//! Cipher operations over node key material
//!
//! [`CipherEngine`] borrows a [`KeyMaterial`] and exposes stateless
//! transforms: RSA-OAEP for short secrets, AES-256-CBC for bulk payloads,
//! RSA-PSS detached signatures, sealed envelopes, and SHA-256 hashing.
//! Every method takes `&self`; the engine holds no state of its own and is
//! safe to share across threads.

use crate::digest::{self, ContentDigest, DIGEST_SIZE};
use crate::error::{CryptoError, Result};
use crate::keys::{KeyMaterial, PeerPublicKey, SymmetricKeyMaterial};
use crate::padding::{self, BLOCK_SIZE};
use crate::sealed;
use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pss, RsaPublicKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Largest plaintext one OAEP block under `key` can carry
/// (`modulus_bytes - 2 * hash_len - 2`; 190 for RSA-2048 with SHA-256)
fn oaep_limit(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(2 * DIGEST_SIZE + 2)
}

fn encrypt_oaep(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let max = oaep_limit(key);
    if plaintext.len() > max {
        return Err(CryptoError::Encoding {
            len: plaintext.len(),
            max,
        });
    }
    key.encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))
}

/// RSA-OAEP wrap symmetric material (`key || iv`) for a recipient node.
///
/// Needs no private key; [`CipherEngine::wrap_session_key`] is the in-node
/// form that wraps the engine's own material.
pub fn wrap_session_key(
    material: &SymmetricKeyMaterial,
    recipient: &PeerPublicKey,
) -> Result<Vec<u8>> {
    let bytes = material.to_bytes();
    encrypt_oaep(recipient.as_rsa(), &bytes[..])
}

/// Stateless cipher operations over one node's [`KeyMaterial`]
pub struct CipherEngine<'a> {
    keys: &'a KeyMaterial,
}

impl<'a> CipherEngine<'a> {
    /// Build an engine over borrowed key material
    pub fn new(keys: &'a KeyMaterial) -> Self {
        Self { keys }
    }

    // -------------------------------------------------------------------------
    // Asymmetric (RSA-OAEP, SHA-256 digest and MGF1, empty label)
    // -------------------------------------------------------------------------

    /// Encrypt a short payload for `recipient` with RSA-OAEP.
    ///
    /// `None` selects this node's own public key, for payloads the node will
    /// store and later decrypt itself. Plaintext is limited to 190 bytes
    /// under 2048-bit keys; longer input fails with
    /// [`CryptoError::Encoding`].
    pub fn asymmetric_encrypt(
        &self,
        plaintext: &[u8],
        recipient: Option<&PeerPublicKey>,
    ) -> Result<Vec<u8>> {
        let key = recipient
            .map(|peer| peer.as_rsa())
            .unwrap_or(&self.keys.asymmetric.public_key);
        encrypt_oaep(key, plaintext)
    }

    /// Decrypt an RSA-OAEP payload with this node's private key.
    ///
    /// Rejection reports only [`CryptoError::Decryption`], never which
    /// internal check failed.
    pub fn asymmetric_decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.keys
            .asymmetric
            .private_key
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| CryptoError::Decryption)
    }

    // -------------------------------------------------------------------------
    // Symmetric (AES-256-CBC, PKCS#7)
    // -------------------------------------------------------------------------

    /// Encrypt a payload of any length under the node's shared key/IV.
    ///
    /// PKCS#7 padding is always applied, so the ciphertext length is a
    /// non-zero multiple of [`BLOCK_SIZE`] and strictly greater than the
    /// plaintext length.
    pub fn symmetric_encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let padded = padding::pad(plaintext);
        Aes256CbcEnc::new(
            self.keys.symmetric.key().into(),
            self.keys.symmetric.iv().into(),
        )
        .encrypt_padded_vec_mut::<NoPadding>(&padded)
    }

    /// Decrypt an AES-256-CBC payload and strip its PKCS#7 padding.
    ///
    /// A length that is not a block multiple fails with
    /// [`CryptoError::Format`] before any cipher work; an out-of-range pad
    /// length fails with [`CryptoError::Padding`]. A mismatched key usually
    /// passes both checks and yields garbage plaintext instead.
    pub fn symmetric_decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CryptoError::Format(ciphertext.len()));
        }
        // No final block means no recoverable pad length.
        if ciphertext.is_empty() {
            return Err(CryptoError::Padding);
        }
        let mut plaintext = Aes256CbcDec::new(
            self.keys.symmetric.key().into(),
            self.keys.symmetric.iv().into(),
        )
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| CryptoError::Format(ciphertext.len()))?;
        padding::unpad(&mut plaintext)?;
        Ok(plaintext)
    }

    // -------------------------------------------------------------------------
    // Session-key wrapping
    // -------------------------------------------------------------------------

    /// Wrap this node's symmetric material for a recipient.
    ///
    /// The recipient unwraps with [`Self::unwrap_session_key`] and adopts
    /// the material via [`KeyMaterial::with_symmetric`]; from then on
    /// symmetric ciphertexts flow both ways.
    pub fn wrap_session_key(&self, recipient: &PeerPublicKey) -> Result<Vec<u8>> {
        wrap_session_key(&self.keys.symmetric, recipient)
    }

    /// Unwrap symmetric material wrapped for this node
    pub fn unwrap_session_key(&self, wrapped: &[u8]) -> Result<SymmetricKeyMaterial> {
        let bytes = Zeroizing::new(self.asymmetric_decrypt(wrapped)?);
        SymmetricKeyMaterial::from_bytes(&bytes)
    }

    // -------------------------------------------------------------------------
    // Detached signatures (RSA-PSS, SHA-256, digest-length salt)
    // -------------------------------------------------------------------------

    /// Sign `data` with this node's private key
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let hashed = Sha256::digest(data);
        self.keys
            .asymmetric
            .private_key
            .sign_with_rng(&mut OsRng, Pss::new::<Sha256>(), &hashed)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))
    }

    /// Verify a detached signature over `data`.
    ///
    /// `None` checks against this node's own public key.
    pub fn verify(
        &self,
        data: &[u8],
        signature: &[u8],
        signer: Option<&PeerPublicKey>,
    ) -> Result<()> {
        let key = signer
            .map(|peer| peer.as_rsa())
            .unwrap_or(&self.keys.asymmetric.public_key);
        let hashed = Sha256::digest(data);
        key.verify(Pss::new::<Sha256>(), &hashed, signature)
            .map_err(|_| CryptoError::InvalidSignature)
    }

    // -------------------------------------------------------------------------
    // Sealed envelopes and hashing
    // -------------------------------------------------------------------------

    /// Seal a payload in an authenticated envelope bound to
    /// `associated_data`. The envelope key is derived from the node's
    /// symmetric key, so both ends of a session open each other's envelopes.
    pub fn seal(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        sealed::seal(self.keys.symmetric.key(), plaintext, associated_data)
    }

    /// Open a sealed envelope, verifying its tag and associated data
    pub fn open_sealed(&self, envelope: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        sealed::open(self.keys.symmetric.key(), envelope, associated_data)
    }

    /// SHA-256 digest of arbitrary payload bytes
    pub fn hash(&self, data: &[u8]) -> ContentDigest {
        digest::sha256(data)
    }
}
