// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation logic

use crate::config::{MissingNamePolicy, ReportConfig};
use crate::error::ReportError;
use crate::i18n::{lookup_key, LanguageNames};
use crate::types::*;

pub struct ReportGenerator<'a> {
    names: &'a LanguageNames,
    config: &'a ReportConfig,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(names: &'a LanguageNames, config: &'a ReportConfig) -> Self {
        Self { names, config }
    }

    pub fn generate(&self, status: &[StatusEntry]) -> Result<Report, ReportError> {
        self.config.validate()?;

        let mut named = status
            .iter()
            .map(|entry| -> Result<_, ReportError> {
                Ok((self.display_name(&entry.code)?, entry))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable: equal names keep their input order
        named.sort_by(|a, b| a.0.cmp(&b.0));

        let rows = named
            .into_iter()
            .map(|(name, entry)| self.build_row(name, entry))
            .collect();

        let template = TemplateRow {
            filename: self.config.template_filename.clone(),
            download_url: self.config.download_url(&self.config.template_filename),
        };

        Ok(Report {
            bar_width: self.config.bar_width,
            rows,
            template,
        })
    }

    fn display_name(&self, code: &str) -> Result<String, ReportError> {
        if let Some(name) = self.names.resolve(code) {
            return Ok(name.to_string());
        }
        match self.config.missing_name {
            MissingNamePolicy::Legacy => Ok(String::new()),
            MissingNamePolicy::Fallback => {
                tracing::warn!(code, key = lookup_key(code), "no display name, showing the code");
                Ok(code.to_string())
            }
            MissingNamePolicy::Strict => Err(ReportError::MissingDisplayName {
                code: code.to_string(),
                key: lookup_key(code).to_string(),
            }),
        }
    }

    fn build_row(&self, name: String, entry: &StatusEntry) -> ReportRow {
        let counts = entry.status.clone();
        let broken = counts.is_broken();
        let percentages = Percentages::compute(&counts);
        let widths = BarWidths::allocate(self.config.bar_width, &counts);
        let class = RowClass::classify(&counts);
        let filename = format!("{}.po", entry.code);

        if broken {
            tracing::warn!(code = %entry.code, "catalog has no messages at all");
        }
        tracing::debug!(
            code = %entry.code,
            translated = percentages.translated,
            fuzzy = percentages.fuzzy,
            untranslated = percentages.untranslated,
            class = %class,
            "computed row"
        );

        ReportRow {
            code: entry.code.clone(),
            name,
            author: self.config.author_for(&entry.code).map(str::to_string),
            broken,
            class,
            counts,
            percentages,
            widths,
            download_url: self.config.download_url(&filename),
            filename,
        }
    }
}
