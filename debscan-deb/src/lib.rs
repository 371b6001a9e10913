// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

//! Debian binary package (`.deb`) format handling.
//!
//! A `.deb` is an `ar` archive. One of its members, `control.tar.gz`, is a
//! gzip-compressed tar archive whose `./control` entry holds the package's
//! control stanza. This crate only implements the read path needed to reach
//! that entry.
//!
//! The two layers are independent [`Container`] decoders composed by a
//! [`ControlLocator`], so either layer can be tested or replaced on its own.
//!
//! # Design Principles
//!
//! 1. **Sequential**: both layers are scanned front to back, there is no index
//! 2. **Bounded**: entries that are not the target are skipped, not buffered
//! 3. **Precise failures**: a missing member and a missing entry are distinct errors

mod container;
mod error;
mod locator;

pub use container::{ArContainer, Container, TarGzContainer};
pub use error::{Layer, LocateError};
pub use locator::{CONTROL_ENTRY, CONTROL_MEMBER, ControlLocator, locate_control};
