// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use thiserror::Error;
use tracing::trace;

use crate::StanzaFields;

/// A continuation line that appeared before any field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("continuation line {line} has no field to continue: {content:?}")]
pub struct MalformedStanza {
    /// 1-based line number within the stanza text.
    pub line: usize,
    pub content: String,
}

/// Parsed fields together with the lines that were dropped as malformed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub fields: StanzaFields,
    pub malformed: Vec<MalformedStanza>,
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Comment,
    Continuation(&'a str),
    Field { name: &'a str, value: &'a str },
    Other,
}

/// Control characters `^A` through `^Z` are not allowed in field names.
fn is_name_char(c: char) -> bool {
    !(c.is_whitespace() || c == ':' || ('\u{01}'..='\u{1a}').contains(&c))
}

fn classify(line: &str) -> Line<'_> {
    if line.starts_with('#') {
        return Line::Comment;
    }
    if line.starts_with(char::is_whitespace) {
        let content = line.trim();
        return if content.is_empty() {
            Line::Other
        } else {
            Line::Continuation(content)
        };
    }
    let Some((name, value)) = line.split_once(':') else {
        return Line::Other;
    };
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Line::Other;
    }
    Line::Field {
        name,
        value: value.trim_start(),
    }
}

/// Parses `text`, dropping continuation lines that precede every field.
pub fn parse(text: &str) -> StanzaFields {
    parse_report(text).fields
}

/// Parses `text` and reports every line that was dropped as malformed.
pub fn parse_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut current: Option<&str> = None;

    for (index, line) in text.lines().enumerate() {
        match classify(line) {
            Line::Comment => {}
            Line::Continuation(content) => {
                let continued = current
                    .map(|name| report.fields.continue_field(name, content))
                    .unwrap_or(false);
                if !continued {
                    report.malformed.push(MalformedStanza {
                        line: index + 1,
                        content: line.to_string(),
                    });
                }
            }
            Line::Field { name, value } => {
                report.fields.insert(name, value);
                current = Some(name);
            }
            Line::Other => trace!(line = index + 1, "ignoring line {line:?}"),
        }
    }
    report
}
