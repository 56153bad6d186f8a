// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for report rendering and input loading

use std::path::PathBuf;

/// Failures while turning status data into a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// No display name resolves for this code and the strict policy is set.
    #[error("no display name for language code `{code}` (lookup key `{key}`)")]
    MissingDisplayName { code: String, key: String },
    /// The bar must be at least one pixel wide.
    #[error("bar width must be positive")]
    InvalidBarWidth,
}

/// Failures while reading config or status files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse TOML in {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to parse JSON in {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to parse YAML in {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// Status files are picked by extension.
    #[error("unsupported status file format: {path} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },
    #[error("malformed status record #{index}: {reason}")]
    MalformedStatusRecord { index: usize, reason: String },
    #[error(transparent)]
    Report(#[from] ReportError),
}
