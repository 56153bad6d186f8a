// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report configuration and the TOML config file
//!
//! Every key is optional. A missing `[languages]` table means the built-in
//! name table is used.

use crate::error::{LoadError, ReportError};
use crate::i18n::LanguageNames;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://cvs.savannah.gnu.org/viewcvs/gnubg/gnubg/po/";
pub const DEFAULT_BRANCH: &str = "HEAD";
pub const DEFAULT_TEMPLATE: &str = "gnubg.pot";
pub const DEFAULT_BAR_WIDTH: u32 = 200;

/// What to do when a code has no display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingNamePolicy {
    /// Render an empty name without complaint, as the old status page did.
    #[serde(alias = "empty")]
    Legacy,
    /// Warn and render the raw code in place of the name.
    #[default]
    #[serde(alias = "code")]
    Fallback,
    /// Refuse to render.
    #[serde(alias = "error")]
    Strict,
}

/// Images stacked to draw the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarImages {
    pub translated: String,
    pub fuzzy: String,
    pub untranslated: String,
    pub height: u32,
}

impl Default for BarImages {
    fn default() -> Self {
        Self {
            translated: "translated.png".to_string(),
            fuzzy: "fuzzy.png".to_string(),
            untranslated: "untranslated.png".to_string(),
            height: 16,
        }
    }
}

/// Everything the reporter needs besides the name table and the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory URL holding the `.po` files; the file name is appended.
    pub base_url: String,
    pub branch: String,
    pub template_filename: String,
    pub bar_width: u32,
    pub images: BarImages,
    pub show_author: bool,
    pub authors: BTreeMap<String, String>,
    pub missing_name: MissingNamePolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            template_filename: DEFAULT_TEMPLATE.to_string(),
            bar_width: DEFAULT_BAR_WIDTH,
            images: BarImages::default(),
            show_author: false,
            authors: BTreeMap::new(),
            missing_name: MissingNamePolicy::default(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.bar_width == 0 {
            return Err(ReportError::InvalidBarWidth);
        }
        Ok(())
    }

    /// Raw-file link for a catalog or template in the configured branch.
    pub fn download_url(&self, filename: &str) -> String {
        format!(
            "{}{}?rev={}&content-type=text/plain",
            self.base_url, filename, self.branch
        )
    }

    /// Author credit for a code, if authors are shown. Falls back from the
    /// full code to its base language.
    pub fn author_for(&self, code: &str) -> Option<&str> {
        if !self.show_author {
            return None;
        }
        self.authors
            .get(code)
            .or_else(|| self.authors.get(crate::i18n::lookup_key(code)))
            .map(String::as_str)
    }
}

/// On-disk layout of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    report: ReportConfig,
    languages: Option<LanguageNames>,
}

/// Parsed config: reporter settings plus the language-name table.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub report: ReportConfig,
    pub languages: LanguageNames,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            languages: LanguageNames::builtin(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, LoadError> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| LoadError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
        file.report.validate()?;
        Ok(Self {
            report: file.report,
            languages: file.languages.unwrap_or_else(LanguageNames::builtin),
        })
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text, path)?;
        tracing::debug!(
            path = %path.display(),
            languages = settings.languages.len(),
            "loaded config"
        );
        Ok(settings)
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LoadError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
