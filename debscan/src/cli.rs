// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "debscan", version, about = "Build package index records from Debian archives")]
pub struct Cli {
    /// Configuration file (defaults to $DEBSCAN_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject packages whose control file has continuation lines before any field
    #[arg(long, global = true)]
    pub strict: bool,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build records for every package archive in a directory
    Scan {
        dir: PathBuf,

        /// Number of archives processed at once
        #[arg(short, long)]
        jobs: Option<usize>,

        /// File extension identifying package archives
        #[arg(long)]
        extension: Option<String>,
    },
    /// Print the control fields and digests of one package archive
    Show { file: PathBuf },
}

impl Cli {
    /// Overrides file configuration with flags given on the command line.
    pub fn apply(&self, config: &mut Config) {
        config.strict |= self.strict;
        config.pretty |= self.pretty;
        if let Command::Scan {
            jobs, extension, ..
        } = &self.command
        {
            if jobs.is_some() {
                config.jobs = *jobs;
            }
            if let Some(extension) = extension {
                config.extension = extension.clone();
            }
        }
    }
}
