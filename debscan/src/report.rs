// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use debscan_index::PackageRecord;
use serde::Serialize;

use crate::error::ScanError;
use crate::scan::ScanOutcome;

#[derive(Debug, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub error: String,
}

/// JSON document printed by `debscan scan`.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub packages: Vec<PackageRecord>,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = ScanOutcome>) -> Self {
        let mut report = Report::default();
        for ScanOutcome { path, result } in outcomes {
            match result {
                Ok(record) => report.packages.push(record),
                Err(e) => report.failures.push(Failure {
                    path,
                    error: failure_message(&e),
                }),
            }
        }
        report
    }
}

/// Renders `value` as JSON, pretty-printed if requested.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ScanError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

// The path is already carried by the failure entry.
fn failure_message(e: &ScanError) -> String {
    match e {
        ScanError::Record { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
