// SPDX-License-Identifier: PMPL-1.0-or-later

//! transtat: translation-status tables for gettext catalogs.
//!
//! Takes per-language message counts (translated, fuzzy, untranslated and a
//! last-update stamp) produced by an external statistics extractor and turns
//! them into a status report: one row per language sorted by display name,
//! each with percentages, a proportional three-segment bar and a download
//! link, plus a trailing row for the catalog template.
//!
//! PIPELINE:
//! 1. **Status**: load the extractor's records ([`status::load_status`]).
//! 2. **Report**: resolve names, sort and compute rows ([`report::render_report`]).
//! 3. **Output**: HTML table, JSON, YAML or a terminal table
//!    ([`report::ReportOutputFormat`]).

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod report;
pub mod status;
pub mod types;

pub use config::{MissingNamePolicy, ReportConfig, Settings};
pub use error::{LoadError, ReportError};
pub use i18n::LanguageNames;
pub use report::{render_html, render_report};
pub use types::{CategoryStatus, Report, ReportRow, RowClass, StatusEntry};
