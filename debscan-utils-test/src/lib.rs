// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

//! Test utilities for debscan.
//!
//! Builders for synthetic `.deb` archives and their layers, a temporary
//! repository directory, and proptest strategies for stanza text.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use proptest::prelude::*;
use tempfile::TempDir;

/// Content of the `debian-binary` member of a format 2.0 package.
pub const DEBIAN_BINARY: &[u8] = b"2.0\n";

/// Builds an `ar` archive holding `members` in order.
pub fn ar_archive(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = ar::Builder::new(Vec::new());
    for (name, data) in members {
        let header = ar::Header::new(name.as_bytes().to_vec(), data.len() as u64);
        builder.append(&header, *data).unwrap();
    }
    builder.into_inner().unwrap()
}

/// Builds a gzip-compressed tar archive holding `entries` in order.
///
/// Paths are written verbatim into the header, so `./control` stays
/// `./control` instead of being normalized to `control`.
pub fn tar_gz(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, data) in entries {
        let mut header = tar::Header::new_gnu();
        let name = path.as_bytes();
        assert!(name.len() < 100, "tar fixture path too long: {path}");
        header.as_old_mut().name[..name.len()].copy_from_slice(name);
        if path.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_mode(0o755);
        } else {
            header.set_entry_type(tar::EntryType::Regular);
            header.set_mode(0o644);
        }
        header.set_size(data.len() as u64);
        header.set_mtime(0);
        header.set_cksum();
        builder.append(&header, *data).unwrap();
    }
    gzip(&builder.into_inner().unwrap())
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// A minimal but well-formed package whose `./control` holds `control`.
pub fn deb(control: &str) -> Vec<u8> {
    let control_tar = tar_gz(&[("./", b""), ("./control", control.as_bytes())]);
    let data_tar = tar_gz(&[("./usr/share/doc/demo/copyright", b"public domain\n")]);
    ar_archive(&[
        ("debian-binary", DEBIAN_BINARY),
        ("control.tar.gz", &control_tar),
        ("data.tar.gz", &data_tar),
    ])
}

/// A temporary directory standing in for a package repository.
pub struct RepoDir {
    inner: TempDir,
}

impl RepoDir {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            inner: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Writes `data` to `name` inside the directory and returns the full path.
    pub fn write(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.inner.path().join(name);
        std::fs::write(&path, data).unwrap();
        path
    }
}

/// Valid field names: no whitespace, no colon, no control characters.
pub fn arb_field_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9-]{0,15}"
}

/// Single-line values without leading or trailing whitespace.
pub fn arb_field_value() -> impl Strategy<Value = String> {
    "([!-~]([ -~]{0,30}[!-~])?)?"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deb_starts_with_ar_magic() {
        let archive = deb("Package: demo\n");
        assert!(archive.starts_with(b"!<arch>\n"));
    }

    #[test]
    fn tar_gz_keeps_dot_slash() {
        let data = tar_gz(&[("./control", b"x")]);
        let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(&data[..]));
        let entry = archive.entries().unwrap().next().unwrap().unwrap();
        assert_eq!(entry.path_bytes().as_ref(), b"./control");
    }
}
