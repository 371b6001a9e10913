// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use std::path::Path;

use debscan_control::{StanzaFields, parse_report};
use debscan_deb::{ArContainer, Container, ControlLocator, TarGzContainer};
use debscan_utils_hash::Digests;
use tracing::{debug, warn};

use crate::{PackageRecord, RecordError};

/// Builds [`PackageRecord`]s from package archives.
///
/// By default stanza parsing is lenient: continuation lines that precede
/// every field are logged and dropped. A [`strict`](Self::strict) builder
/// rejects such packages instead.
#[derive(Debug, Default, Clone)]
pub struct RecordBuilder<O = ArContainer, I = TarGzContainer> {
    locator: ControlLocator<O, I>,
    strict: bool,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: Container, I: Container> RecordBuilder<O, I> {
    pub fn with_locator(locator: ControlLocator<O, I>) -> Self {
        Self {
            locator,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builds the index record for the archive at `path`.
    ///
    /// `file_size` is the size of the file on disk and is recorded as
    /// `Size`; `path` is recorded as `Filename`.
    pub fn build(
        &self,
        archive: &[u8],
        path: impl AsRef<Path>,
        file_size: u64,
    ) -> Result<PackageRecord, RecordError> {
        let filename = path.as_ref().to_string_lossy().into_owned();
        let fields = self.control_fields(archive, &filename)?;
        let digests = Digests::compute(archive);
        let record = PackageRecord::new(fields, &digests).place(file_size, filename);
        debug!(
            "built record for {} {}",
            record.package().unwrap_or("<unnamed>"),
            record.version().unwrap_or("<unversioned>"),
        );
        Ok(record)
    }

    /// Builds a record holding only the control fields and digests, without
    /// `Size` or `Filename`.
    pub fn inspect(&self, archive: &[u8]) -> Result<PackageRecord, RecordError> {
        let fields = self.control_fields(archive, "<archive>")?;
        Ok(PackageRecord::new(fields, &Digests::compute(archive)))
    }

    fn control_fields(&self, archive: &[u8], origin: &str) -> Result<StanzaFields, RecordError> {
        let text = self.locator.locate(archive)?;
        let report = parse_report(&text);
        if let Some(first) = report.malformed.first() {
            if self.strict {
                return Err(first.clone().into());
            }
            for malformed in &report.malformed {
                warn!("{origin}: dropping {malformed}");
            }
        }
        Ok(report.fields)
    }
}
