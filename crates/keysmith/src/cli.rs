//! Command-line interface for keysmith

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// keysmith - VitalMesh key provisioning tool
#[derive(Parser, Debug)]
#[command(name = "keysmith")]
#[command(about = "Generate, inspect, and wrap VitalMesh node key material")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate node key material and write PEM key files
    Keygen {
        /// Node name used as the key file stem
        #[arg(long, default_value = "node")]
        name: String,

        /// Output directory for key files
        #[arg(long, default_value = "./keys", env = "KEYSMITH_OUT_DIR")]
        out_dir: PathBuf,

        /// Overwrite existing key files
        #[arg(long)]
        force: bool,
    },

    /// Print the public half and fingerprint of a private key
    Pubkey {
        /// Path to a PKCS#8 private key PEM
        key: PathBuf,
    },

    /// Wrap symmetric session material for a peer public key
    Wrap {
        /// Path to the recipient's public key PEM
        recipient: PathBuf,

        /// Hex-encoded `key || iv` material; fresh material when omitted
        #[arg(long)]
        session_key: Option<String>,

        /// Also print the session material hex (line two of the output)
        #[arg(long)]
        reveal: bool,
    },

    /// Unwrap symmetric session material with a private key
    Unwrap {
        /// Path to a PKCS#8 private key PEM
        key: PathBuf,

        /// Hex-encoded wrapped blob
        wrapped: String,

        /// Print the recovered key and IV instead of only their digest
        #[arg(long)]
        reveal: bool,
    },

    /// Print the SHA-256 digest of a file
    Digest {
        /// Path to the payload file
        file: PathBuf,
    },
}
