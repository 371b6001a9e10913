// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use tracing::{debug, warn};

use crate::container::{ArContainer, Container, TarGzContainer};
use crate::error::{Layer, LocateError};

/// Name of the outer member holding the control archive.
pub const CONTROL_MEMBER: &str = "control.tar.gz";

/// Path of the control file inside [`CONTROL_MEMBER`].
pub const CONTROL_ENTRY: &str = "./control";

/// Finds the control file by composing an outer and an inner [`Container`].
#[derive(Debug, Default, Clone)]
pub struct ControlLocator<O = ArContainer, I = TarGzContainer> {
    outer: O,
    inner: I,
}

impl ControlLocator {
    /// The locator for standard `.deb` packages.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: Container, I: Container> ControlLocator<O, I> {
    pub fn with_containers(outer: O, inner: I) -> Self {
        Self { outer, inner }
    }

    /// Returns the raw bytes of the control file inside `archive`.
    pub fn locate_bytes(&self, archive: &[u8]) -> Result<Vec<u8>, LocateError> {
        let member = self
            .outer
            .extract(archive, CONTROL_MEMBER.as_bytes())
            .map_err(|source| LocateError::Decode {
                layer: Layer::Outer(self.outer.format()),
                source,
            })?
            .ok_or_else(|| LocateError::MissingOuterMember {
                member: CONTROL_MEMBER.to_string(),
            })?;
        debug!("found {CONTROL_MEMBER} ({} bytes)", member.len());

        self.inner
            .extract(&member, CONTROL_ENTRY.as_bytes())
            .map_err(|source| LocateError::Decode {
                layer: Layer::Inner(self.inner.format()),
                source,
            })?
            .ok_or_else(|| LocateError::MissingInnerEntry {
                member: CONTROL_MEMBER.to_string(),
                entry: CONTROL_ENTRY.to_string(),
            })
    }

    /// Returns the control file inside `archive` as text.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn locate(&self, archive: &[u8]) -> Result<String, LocateError> {
        let bytes = self.locate_bytes(archive)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!("{CONTROL_ENTRY} is not valid UTF-8: {}", err.utf8_error());
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        })
    }
}

/// Returns the control file of a standard `.deb` package as text.
pub fn locate_control(archive: &[u8]) -> Result<String, LocateError> {
    ControlLocator::new().locate(archive)
}
