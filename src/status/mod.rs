// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading catalog statistics produced by the external extractor
//!
//! The extractor writes one record per language. Record order is kept as-is
//! because it breaks ties between languages with the same display name.

use crate::error::LoadError;
use crate::i18n::{is_language_code, LanguageNames};
use crate::types::StatusEntry;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFormat {
    Json,
    Yaml,
    Toml,
}

impl StatusFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(StatusFormat::Json),
            "yaml" | "yml" => Some(StatusFormat::Yaml),
            "toml" => Some(StatusFormat::Toml),
            _ => None,
        }
    }
}

/// TOML has no top-level arrays, so records live under `[[catalog]]`.
#[derive(Debug, Deserialize)]
struct TomlStatusFile {
    #[serde(default)]
    catalog: Vec<StatusEntry>,
}

/// Parse status records from text in the given format.
pub fn parse_status(
    text: &str,
    format: StatusFormat,
    path: &Path,
) -> Result<Vec<StatusEntry>, LoadError> {
    let entries: Vec<StatusEntry> = match format {
        StatusFormat::Json => serde_json::from_str(text).map_err(|source| LoadError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?,
        StatusFormat::Yaml => serde_yaml::from_str(text).map_err(|source| LoadError::ParseYaml {
            path: path.to_path_buf(),
            source,
        })?,
        StatusFormat::Toml => {
            let file: TomlStatusFile =
                toml::from_str(text).map_err(|source| LoadError::ParseToml {
                    path: path.to_path_buf(),
                    source,
                })?;
            file.catalog
        }
    };
    validate_entries(&entries)?;
    Ok(entries)
}

/// Read a status file, choosing the parser by extension.
pub fn load_status(path: &Path) -> Result<Vec<StatusEntry>, LoadError> {
    let format = StatusFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_status(&text, format, path)?;
    tracing::debug!(path = %path.display(), records = entries.len(), "loaded catalog status");
    Ok(entries)
}

/// Codes must be non-empty and unique. Unusual code shapes are only warned
/// about, since the extractor names catalogs after whatever files it finds.
pub fn validate_entries(entries: &[StatusEntry]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.code.trim().is_empty() {
            return Err(LoadError::MalformedStatusRecord {
                index,
                reason: "empty language code".to_string(),
            });
        }
        if !seen.insert(entry.code.as_str()) {
            return Err(LoadError::MalformedStatusRecord {
                index,
                reason: format!("duplicate language code `{}`", entry.code),
            });
        }
        if !is_language_code(&entry.code) {
            tracing::warn!(code = %entry.code, "status record has an unusual language code");
        }
    }
    Ok(())
}

/// Outcome of checking status records against a name table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogCheck {
    pub checked: usize,
    /// Codes with no display name, in record order.
    pub missing: Vec<String>,
    /// Codes whose catalog holds no messages, named or not.
    pub broken: Vec<String>,
}

impl CatalogCheck {
    /// Broken catalogs are reported but only missing names fail the check.
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn check_catalogs(entries: &[StatusEntry], names: &LanguageNames) -> CatalogCheck {
    let mut check = CatalogCheck {
        checked: entries.len(),
        ..CatalogCheck::default()
    };
    for entry in entries {
        if names.resolve(&entry.code).is_none() {
            check.missing.push(entry.code.clone());
        }
        if entry.status.is_broken() {
            check.broken.push(entry.code.clone());
        }
    }
    check
}
