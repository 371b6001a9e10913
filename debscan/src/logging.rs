// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::ScanError;

/// Level used when `RUST_LOG` is unset.
pub fn default_level(verbose: u8, quiet: bool) -> Level {
    match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// JSON.
pub fn init(verbose: u8, quiet: bool) -> Result<(), ScanError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet).as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ScanError::Logging(e.to_string()))
}
