// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use std::io::{self, Read as _};

use flate2::read::GzDecoder;
use tracing::trace;

/// Upper bound on buffer space reserved up front from a tar header's size
/// field. Larger entries still read fine, the buffer just grows.
const TAR_PREALLOC_LIMIT: u64 = 64 * 1024;

/// One archive format from which a single named member can be pulled.
pub trait Container {
    /// Short format name used in error messages, e.g. `ar`.
    fn format(&self) -> &'static str;

    /// Returns the content of the first member named exactly `name`, or
    /// `None` when the archive has no such member.
    ///
    /// Errors mean `data` could not be decoded as this format.
    fn extract(&self, data: &[u8], name: &[u8]) -> io::Result<Option<Vec<u8>>>;
}

/// The outer `ar` container of a `.deb`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArContainer;

impl Container for ArContainer {
    fn format(&self) -> &'static str {
        "ar"
    }

    fn extract(&self, data: &[u8], name: &[u8]) -> io::Result<Option<Vec<u8>>> {
        let mut archive = ar::Archive::new(data);
        while let Some(entry) = archive.next_entry() {
            let mut entry = entry?;
            let header = entry.header();
            if header.identifier() != name {
                trace!(
                    "skipping ar member {:?}",
                    String::from_utf8_lossy(header.identifier())
                );
                continue;
            }
            // The header size is untrusted; the member cannot exceed the input.
            let capacity = header.size().min(data.len() as u64);
            let mut content = Vec::with_capacity(capacity as usize);
            entry.read_to_end(&mut content)?;
            return Ok(Some(content));
        }
        Ok(None)
    }
}

/// A gzip-compressed tar archive, as used for `control.tar.gz`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzContainer;

impl Container for TarGzContainer {
    fn format(&self) -> &'static str {
        "tar.gz"
    }

    fn extract(&self, data: &[u8], name: &[u8]) -> io::Result<Option<Vec<u8>>> {
        let mut archive = tar::Archive::new(GzDecoder::new(data));
        for entry in archive.entries()? {
            let mut entry = entry?;
            // Unread entry data is skipped by the iterator.
            if entry.path_bytes().as_ref() != name {
                trace!(
                    "skipping tar entry {:?}",
                    String::from_utf8_lossy(&entry.path_bytes())
                );
                continue;
            }
            let capacity = entry.size().min(TAR_PREALLOC_LIMIT);
            let mut content = Vec::with_capacity(capacity as usize);
            entry.read_to_end(&mut content)?;
            return Ok(Some(content));
        }
        Ok(None)
    }
}
