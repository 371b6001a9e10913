// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use debscan_control::MalformedStanza;
use debscan_deb::LocateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to locate control file: {0}")]
    Locate(#[from] LocateError),

    /// Only produced by a strict [`RecordBuilder`](crate::RecordBuilder).
    #[error("malformed control file: {0}")]
    MalformedStanza(#[from] MalformedStanza),
}
