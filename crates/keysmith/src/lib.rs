//! keysmith - VitalMesh key provisioning tool
//!
//! This tool provides:
//! - Node key pair generation with PEM key files
//! - Public key re-export and fingerprinting
//! - Session material wrapping/unwrapping for provisioning
//! - Payload digests for integrity checks
//!
//! Everything happens on the local filesystem; distributing the produced
//! key files to nodes stays with the operator.

pub mod cli;
pub mod ops;

pub use cli::Cli;
