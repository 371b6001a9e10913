// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use debscan_control::StanzaFields;
use debscan_utils_hash::Digests;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{FILENAME_FIELD, SIZE_FIELD};

/// The value of one record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(u64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

/// One package's entry in an index.
///
/// Fields keep their order: control fields as they appeared, then the
/// digests, then `Size` and `Filename`. A later field with the same name
/// replaces the earlier value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageRecord(IndexMap<String, FieldValue>);

impl PackageRecord {
    pub(crate) fn new(fields: StanzaFields, digests: &Digests) -> Self {
        let mut record: IndexMap<String, FieldValue> = fields
            .into_iter()
            .map(|(name, value)| (name, FieldValue::Text(value)))
            .collect();
        for (algorithm, hash) in digests.iter() {
            record.insert(
                algorithm.field_name().to_string(),
                FieldValue::Text(hash.to_hex()),
            );
        }
        PackageRecord(record)
    }

    pub(crate) fn place(mut self, size: u64, filename: String) -> Self {
        self.0.insert(SIZE_FIELD.to_string(), FieldValue::Integer(size));
        self.0.insert(FILENAME_FIELD.to_string(), FieldValue::Text(filename));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text value of `name`; `None` for missing or integer fields.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn package(&self) -> Option<&str> {
        self.text("Package")
    }

    pub fn version(&self) -> Option<&str> {
        self.text("Version")
    }

    pub fn size(&self) -> Option<u64> {
        self.get(SIZE_FIELD).and_then(FieldValue::as_integer)
    }

    pub fn filename(&self) -> Option<&str> {
        self.text(FILENAME_FIELD)
    }
}
