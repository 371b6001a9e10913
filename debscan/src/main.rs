// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use clap::Parser;
use debscan::cli::Cli;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = debscan::logging::init(cli.verbose, cli.quiet) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match debscan::run(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
