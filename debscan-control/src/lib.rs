// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

//! Debian control stanza parsing.
//!
//! A stanza is a block of `Field: value` lines. Lines starting with
//! whitespace continue the previous field, lines starting with `#` are
//! comments. Parsing is lenient: lines that fit no pattern are ignored, and a
//! continuation line with no field before it is dropped and reported as a
//! [`MalformedStanza`] diagnostic rather than failing the whole stanza.
//!
//! ```
//! let fields = debscan_control::parse("Package: demo\nDescription: short\n long\n");
//!
//! assert_eq!(fields.get("Package"), Some("demo"));
//! assert_eq!(fields.get("Description"), Some("short\nlong"));
//! ```

mod fields;
mod parser;

pub use fields::StanzaFields;
pub use parser::{MalformedStanza, ParseReport, parse, parse_report};
