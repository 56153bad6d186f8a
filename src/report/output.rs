// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use crate::config::ReportConfig;
use crate::report::formatter::ReportFormatter;
use crate::report::html::HtmlTable;
use crate::types::Report;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportOutputFormat {
    #[default]
    Html,
    Json,
    Yaml,
    Text,
}

impl ReportOutputFormat {
    pub fn serialize(&self, report: &Report, config: &ReportConfig) -> Result<String> {
        match self {
            ReportOutputFormat::Html => Ok(HtmlTable::new(&config.images).render(report)),
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            ReportOutputFormat::Text => Ok(ReportFormatter::new().format(report)),
        }
    }
}
