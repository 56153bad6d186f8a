// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering of a status report

use crate::types::*;
use colored::*;

/// Characters available to the terminal bar.
pub const TEXT_BAR_WIDTH: u32 = 40;

pub struct ReportFormatter {
    bar_width: u32,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self {
            bar_width: TEXT_BAR_WIDTH,
        }
    }

    pub fn with_bar_width(bar_width: u32) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    /// Plain-text table; colors follow the `colored` crate's global switch.
    pub fn format(&self, report: &Report) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{}", "TRANSLATION STATUS".bold().cyan()));
        lines.push(String::new());

        let name_width = report
            .rows
            .iter()
            .map(|row| row_label(row).chars().count())
            .max()
            .unwrap_or(0)
            .max("language".len());

        lines.push(format!(
            "  {:<name_width$}  {:>7}  {:>7}  {:>7}  {:<bar$}  {}",
            "language",
            "trans",
            "fuzzy",
            "untrans",
            "graph",
            "last updated",
            name_width = name_width,
            bar = self.bar_width as usize,
        ));

        for row in &report.rows {
            lines.push(self.format_row(row, name_width));
        }

        lines.push(String::new());
        lines.push(format!(
            "  Template: {} ({})",
            report.template.filename,
            report.template.download_url.dimmed()
        ));
        lines.push(format!(
            "  {} complete, {} incomplete, {} broken",
            report.count_by_class(RowClass::Complete).to_string().green(),
            report.count_by_class(RowClass::Incomplete).to_string().yellow(),
            report.count_by_class(RowClass::Error).to_string().red(),
        ));
        lines.join("\n")
    }

    fn format_row(&self, row: &ReportRow, name_width: usize) -> String {
        let label = row_label(row);
        let padding = name_width.saturating_sub(label.chars().count());
        let label = match row.class {
            RowClass::Complete => label.green(),
            RowClass::Incomplete => label.normal(),
            RowClass::Error => label.red().bold(),
        };

        format!(
            "  {}{}  {:>5.1} %  {:>5.1} %  {:>5.1} %  {}  {}",
            label,
            " ".repeat(padding),
            row.percentages.translated,
            row.percentages.fuzzy,
            row.percentages.untranslated,
            self.bar(row),
            row.counts.last_update
        )
    }

    /// Same cascading-floor split as the HTML bar, scaled to the terminal.
    fn bar(&self, row: &ReportRow) -> String {
        let widths = BarWidths::allocate(self.bar_width, &row.counts);
        let mut bar = String::new();
        bar.push_str(&format!("{}", "#".repeat(widths.translated as usize).green()));
        bar.push_str(&format!("{}", "~".repeat(widths.fuzzy as usize).yellow()));
        bar.push_str(&format!("{}", ".".repeat(widths.untranslated as usize).red()));
        let used = widths.sum();
        if used < self.bar_width {
            bar.push_str(&" ".repeat((self.bar_width - used) as usize));
        }
        bar
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn row_label(row: &ReportRow) -> String {
    if row.broken {
        format!("{} ({}) BROKEN!", row.name, row.code)
    } else {
        format!("{} ({})", row.name, row.code)
    }
}
