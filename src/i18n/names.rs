// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display-name table for catalog languages.

use super::code::lookup_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Languages the project ships catalogs for, as shown on the status page.
///
/// `en_US` is kept for completeness but never reached through
/// [`LanguageNames::resolve`], which looks region codes up by their prefix.
const BUILTIN: &[(&str, &str)] = &[
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("en", "English"),
    ("en_US", "English US"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("tr", "Turkish"),
];

/// Mapping from language code to human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageNames {
    names: BTreeMap<String, String>,
}

impl LanguageNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// The project's default table.
    pub fn builtin() -> Self {
        BUILTIN.iter().copied().collect()
    }

    pub fn insert(&mut self, code: &str, name: &str) {
        self.names.insert(code.to_string(), name.to_string());
    }

    /// Display name for a catalog code, using the region-prefix rule.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.names.get(lookup_key(code)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LanguageNames {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}
