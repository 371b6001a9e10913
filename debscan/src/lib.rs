// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

//! Scans directories of Debian packages into index records.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scan;

use std::path::Path;

use debscan_index::RecordBuilder;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{IoContext, ScanError};
use crate::report::{Report, to_json};
use crate::scan::Scanner;

/// Runs a parsed command line and returns the JSON to print.
pub async fn run(cli: Cli) -> Result<String, ScanError> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    match &cli.command {
        Command::Scan { dir, .. } => scan(&config, dir).await,
        Command::Show { file } => show(&config, file).await,
    }
}

async fn scan(config: &Config, dir: &Path) -> Result<String, ScanError> {
    let outcomes = Scanner::from_config(config).scan_dir(dir).await?;
    let report = Report::from_outcomes(outcomes);
    info!(
        "built {} records, {} failures",
        report.packages.len(),
        report.failures.len()
    );
    to_json(&report, config.pretty)
}

async fn show(config: &Config, file: &Path) -> Result<String, ScanError> {
    let data = tokio::fs::read(file)
        .await
        .io_context(|| format!("Failed to read {}", file.display()))?;
    let record = RecordBuilder::new()
        .strict(config.strict)
        .inspect(&data)
        .map_err(|source| ScanError::Record {
            path: file.to_path_buf(),
            source,
        })?;
    to_json(&record, config.pretty)
}
