// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use std::io;

use derive_more::Display;
use thiserror::Error;

/// Which layer of the package was being decoded.
#[derive(Display, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Layer {
    #[display("outer {_0} archive")]
    Outer(&'static str),
    #[display("inner {_0} archive")]
    Inner(&'static str),
}

#[derive(Error, Debug)]
pub enum LocateError {
    /// The package has no member holding the control archive.
    #[error("archive has no '{member}' member")]
    MissingOuterMember { member: String },

    /// The control archive has no control file.
    #[error("'{member}' has no '{entry}' entry")]
    MissingInnerEntry { member: String, entry: String },

    /// One of the layers is truncated, corrupt or not an archive at all.
    #[error("failed to decode {layer}: {source}")]
    Decode {
        layer: Layer,
        #[source]
        source: io::Error,
    },
}

impl LocateError {
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            LocateError::MissingOuterMember { .. } | LocateError::MissingInnerEntry { .. }
        )
    }
}
