//! keysmith - VitalMesh key provisioning tool
//!
//! Generates node key material and wraps session keys for peers. Everything
//! happens on the local filesystem; distributing the files is up to the
//! operator.

use clap::Parser;
use keysmith::Cli;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging on stderr; stdout carries the requested artifact
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("keysmith=info".parse().unwrap()))
        .init();

    let cli = Cli::parse();
    match keysmith::ops::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
