//! Test vectors for cross-language validation
//!
//! These vectors MUST be reproduced exactly by the Python services that
//! exchange payloads with VitalMesh nodes.

use crate::cipher::CipherEngine;
use crate::digest::sha256;
use crate::keys::{KeyMaterial, SymmetricKeyMaterial};
use crate::padding::pad;
use serde::Serialize;

/// Test vector output format (JSON serializable)
#[derive(Serialize)]
pub struct TestVector {
    pub name: String,
    pub description: String,
    pub inputs: serde_json::Value,
    pub output_hex: String,
}

/// Generate all test vectors as JSON
pub fn generate_test_vectors() -> Vec<TestVector> {
    vec![
        padding_reading_vector(),
        padding_aligned_vector(),
        digest_empty_vector(),
        digest_abc_vector(),
        cbc_fixed_material_vector(),
    ]
}

fn padding_reading_vector() -> TestVector {
    let plaintext = b"heart_rate=72";
    let padded = pad(plaintext);

    TestVector {
        name: "pkcs7_pad_partial_block".into(),
        description: "PKCS#7 padding of a 13-byte reading to one block".into(),
        inputs: serde_json::json!({
            "plaintext": String::from_utf8_lossy(plaintext),
            "plaintext_hex": hex::encode(plaintext),
        }),
        output_hex: hex::encode(padded),
    }
}

fn padding_aligned_vector() -> TestVector {
    let plaintext = [0xabu8; 16];
    let padded = pad(&plaintext);

    TestVector {
        name: "pkcs7_pad_aligned_block".into(),
        description: "PKCS#7 padding always appends a full block to aligned input".into(),
        inputs: serde_json::json!({
            "plaintext_hex": hex::encode(plaintext),
        }),
        output_hex: hex::encode(padded),
    }
}

fn digest_empty_vector() -> TestVector {
    TestVector {
        name: "sha256_empty".into(),
        description: "SHA-256 of the empty payload".into(),
        inputs: serde_json::json!({ "payload_hex": "" }),
        output_hex: sha256(b"").to_string(),
    }
}

fn digest_abc_vector() -> TestVector {
    TestVector {
        name: "sha256_abc".into(),
        description: "SHA-256 of the three-byte payload \"abc\"".into(),
        inputs: serde_json::json!({ "payload": "abc" }),
        output_hex: sha256(b"abc").to_string(),
    }
}

fn cbc_fixed_material_vector() -> TestVector {
    let mut material_bytes = [0x11u8; 48];
    material_bytes[32..].fill(0x22);
    let material = SymmetricKeyMaterial::from_bytes(&material_bytes).unwrap();

    let keys = KeyMaterial::generate().unwrap().with_symmetric(material);
    let ciphertext = CipherEngine::new(&keys).symmetric_encrypt(b"heart_rate=72");

    TestVector {
        name: "aes256_cbc_fixed_material".into(),
        description: "AES-256-CBC over the PKCS#7-padded reading with fixed key/IV".into(),
        inputs: serde_json::json!({
            "key_hex": hex::encode([0x11u8; 32]),
            "iv_hex": hex::encode([0x22u8; 16]),
            "plaintext": "heart_rate=72",
        }),
        output_hex: hex::encode(ciphertext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_vectors() {
        let vectors = generate_test_vectors();
        assert!(!vectors.is_empty());

        // Print JSON for manual inspection / export
        let json = serde_json::to_string_pretty(&vectors).unwrap();
        println!("Test Vectors:\n{}", json);
    }

    #[test]
    fn test_known_digest_constants() {
        assert_eq!(
            digest_empty_vector().output_hex,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest_abc_vector().output_hex,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_known_padding_constants() {
        assert_eq!(
            padding_reading_vector().output_hex,
            "68656172745f726174653d3732030303"
        );
        assert_eq!(padding_aligned_vector().output_hex.len(), 64);
        assert!(padding_aligned_vector()
            .output_hex
            .ends_with(&"10".repeat(16)));
    }

    #[test]
    fn test_cbc_vector_deterministic() {
        let v1 = cbc_fixed_material_vector();
        let v2 = cbc_fixed_material_vector();
        assert_eq!(v1.output_hex, v2.output_hex);
        // Padded single block in, single block out
        assert_eq!(v1.output_hex.len(), 32);
    }
}
