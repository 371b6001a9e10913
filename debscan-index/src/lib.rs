// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

//! Package index records.
//!
//! [`RecordBuilder`] turns the raw bytes of one `.deb` into a
//! [`PackageRecord`]: the package's control stanza plus `MD5Sum`, `SHA1`,
//! `SHA256`, `Size` and `Filename`. Records are the unit a `Packages` index is
//! assembled from; assembling the index itself is left to the caller.

mod builder;
mod error;
mod record;

pub use builder::RecordBuilder;
pub use debscan_deb::{ArContainer, Container, ControlLocator, TarGzContainer};
pub use error::RecordError;
pub use record::{FieldValue, PackageRecord};

/// Field holding the archive size in bytes.
pub const SIZE_FIELD: &str = "Size";

/// Field holding the archive path.
pub const FILENAME_FIELD: &str = "Filename";
