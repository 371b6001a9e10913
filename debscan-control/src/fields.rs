// SPDX-FileCopyrightText: 2026 debscan contributors
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::Serialize;

/// Fields of one stanza, in the order they first appeared.
///
/// Names are case-sensitive. Inserting a name that is already present
/// replaces its value but keeps its original position.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StanzaFields(IndexMap<String, String>);

impl StanzaFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Appends a continuation line to the value of `name`.
    ///
    /// Returns `false` if `name` is not present.
    pub(crate) fn continue_field(&mut self, name: &str, line: &str) -> bool {
        match self.0.get_mut(name) {
            Some(value) => {
                value.push('\n');
                value.push_str(line);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl IntoIterator for StanzaFields {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StanzaFields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut fields = StanzaFields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}
