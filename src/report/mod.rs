// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod generator;
pub mod html;
pub mod output;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::i18n::LanguageNames;
use crate::types::*;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use generator::ReportGenerator;
pub use html::HtmlTable;
pub use output::ReportOutputFormat;

/// Build the status report: one row per language sorted by display name,
/// followed by the template row.
pub fn render_report(
    names: &LanguageNames,
    status: &[StatusEntry],
    config: &ReportConfig,
) -> Result<Report, ReportError> {
    ReportGenerator::new(names, config).generate(status)
}

/// Build the report and render it as the HTML status table.
pub fn render_html(
    names: &LanguageNames,
    status: &[StatusEntry],
    config: &ReportConfig,
) -> Result<String, ReportError> {
    let report = render_report(names, status, config)?;
    Ok(HtmlTable::new(&config.images).render(&report))
}

/// Save report to file
pub fn save_report<P: AsRef<Path>>(
    report: &Report,
    config: &ReportConfig,
    format: ReportOutputFormat,
    path: P,
) -> Result<()> {
    let content = format.serialize(report, config)?;
    fs::write(path.as_ref(), content)?;
    tracing::info!(path = %path.as_ref().display(), format = ?format, "report saved");
    Ok(())
}
