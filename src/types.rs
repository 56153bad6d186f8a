// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for transtat
//!
//! Inputs are the per-language catalog counts produced by an external
//! statistics extractor; everything else here is derived at report time.

use serde::{Deserialize, Serialize};

/// Message counts for one language catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryStatus {
    pub translated: u64,
    pub fuzzy: u64,
    pub untranslated: u64,
    /// Opaque display string, usually a date.
    #[serde(default)]
    pub last_update: String,
}

impl CategoryStatus {
    pub fn new(translated: u64, fuzzy: u64, untranslated: u64, last_update: &str) -> Self {
        Self {
            translated,
            fuzzy,
            untranslated,
            last_update: last_update.to_string(),
        }
    }

    /// Exact sum of the three counts; three `u64` values always fit a `u128`.
    pub fn total(&self) -> u128 {
        u128::from(self.translated) + u128::from(self.fuzzy) + u128::from(self.untranslated)
    }

    /// A record whose three counts sum to zero cannot produce meaningful
    /// percentages and is reported as broken.
    pub fn is_broken(&self) -> bool {
        self.total() == 0
    }
}

/// One language code paired with its counts, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub code: String,
    #[serde(flatten)]
    pub status: CategoryStatus,
}

impl StatusEntry {
    pub fn new(code: &str, status: CategoryStatus) -> Self {
        Self {
            code: code.to_string(),
            status,
        }
    }
}

/// Row classification, also used as the CSS class of the table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowClass {
    Complete,
    Incomplete,
    Error,
}

impl RowClass {
    pub fn classify(status: &CategoryStatus) -> Self {
        if status.is_broken() {
            RowClass::Error
        } else if status.fuzzy > 0 || status.untranslated > 0 {
            RowClass::Incomplete
        } else {
            RowClass::Complete
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RowClass::Complete => "complete",
            RowClass::Incomplete => "incomplete",
            RowClass::Error => "error",
        }
    }
}

impl std::fmt::Display for RowClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css_class())
    }
}

/// Share of each category in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Percentages {
    pub translated: f64,
    pub fuzzy: f64,
    pub untranslated: f64,
}

impl Percentages {
    /// A zero total is treated as a total of one so every share becomes 0.
    pub fn compute(status: &CategoryStatus) -> Self {
        let total = status.total().max(1) as f64;
        Self {
            translated: 100.0 * status.translated as f64 / total,
            fuzzy: 100.0 * status.fuzzy as f64 / total,
            untranslated: 100.0 * status.untranslated as f64 / total,
        }
    }

    pub fn sum(&self) -> f64 {
        self.translated + self.fuzzy + self.untranslated
    }
}

/// Pixel widths of the three bar segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BarWidths {
    pub translated: u32,
    pub fuzzy: u32,
    pub untranslated: u32,
}

impl BarWidths {
    /// Cascading-floor allocation: each boundary is floored on the running
    /// cumulative count, so the segments never overshoot `bar_width`.
    pub fn allocate(bar_width: u32, status: &CategoryStatus) -> Self {
        let total = status.total().max(1);
        let width = u128::from(bar_width);
        // count <= total, so the quotient never exceeds bar_width
        let boundary = |count: u128| -> u32 { (width * count / total) as u32 };

        let t = u128::from(status.translated);
        let f = u128::from(status.fuzzy);
        let u = u128::from(status.untranslated);

        let w_translated = boundary(t);
        let w_fuzzy = boundary(t + f) - w_translated;
        let w_untranslated = boundary(t + f + u) - w_translated - w_fuzzy;

        Self {
            translated: w_translated,
            fuzzy: w_fuzzy,
            untranslated: w_untranslated,
        }
    }

    pub fn sum(&self) -> u32 {
        self.translated + self.fuzzy + self.untranslated
    }
}

/// Which of the three categories a bar segment stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Translated,
    Fuzzy,
    Untranslated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSegment {
    pub kind: SegmentKind,
    pub width: u32,
}

/// One language row of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub broken: bool,
    pub class: RowClass,
    pub counts: CategoryStatus,
    pub percentages: Percentages,
    pub widths: BarWidths,
    pub filename: String,
    pub download_url: String,
}

impl ReportRow {
    /// Segments to draw, in bar order. A category with no messages gets no
    /// segment at all; a non-empty one is drawn even if its width floors to 0.
    pub fn segments(&self) -> Vec<BarSegment> {
        [
            (SegmentKind::Translated, self.counts.translated, self.widths.translated),
            (SegmentKind::Fuzzy, self.counts.fuzzy, self.widths.fuzzy),
            (
                SegmentKind::Untranslated,
                self.counts.untranslated,
                self.widths.untranslated,
            ),
        ]
        .into_iter()
        .filter(|(_, count, _)| *count != 0)
        .map(|(kind, _, width)| BarSegment { kind, width })
        .collect()
    }
}

/// Trailing row pointing at the catalog template; it has no statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRow {
    pub filename: String,
    pub download_url: String,
}

/// The assembled report: language rows in display order, then the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub bar_width: u32,
    pub rows: Vec<ReportRow>,
    pub template: TemplateRow,
}

impl Report {
    pub fn broken_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.broken)
    }

    pub fn count_by_class(&self, class: RowClass) -> usize {
        self.rows.iter().filter(|row| row.class == class).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_worked_example() {
        let status = CategoryStatus::new(80, 10, 10, "2024-01-01");
        let widths = BarWidths::allocate(200, &status);
        assert_eq!(widths.translated, 160);
        assert_eq!(widths.fuzzy, 20);
        assert_eq!(widths.untranslated, 20);
    }

    #[test]
    fn widths_fill_bar_for_uneven_thirds() {
        let status = CategoryStatus::new(1, 1, 1, "");
        let widths = BarWidths::allocate(200, &status);
        assert_eq!(widths.translated, 66);
        assert_eq!(widths.fuzzy, 67);
        assert_eq!(widths.untranslated, 67);
        assert_eq!(widths.sum(), 200);
    }

    #[test]
    fn broken_record_has_zero_everything() {
        let status = CategoryStatus::new(0, 0, 0, "-");
        assert!(status.is_broken());
        assert_eq!(BarWidths::allocate(200, &status).sum(), 0);
        assert_eq!(Percentages::compute(&status).sum(), 0.0);
        assert_eq!(RowClass::classify(&status), RowClass::Error);
    }

    #[test]
    fn classification() {
        assert_eq!(
            RowClass::classify(&CategoryStatus::new(5, 0, 0, "")),
            RowClass::Complete
        );
        assert_eq!(
            RowClass::classify(&CategoryStatus::new(5, 1, 0, "")),
            RowClass::Incomplete
        );
        assert_eq!(
            RowClass::classify(&CategoryStatus::new(5, 0, 1, "")),
            RowClass::Incomplete
        );
    }

    #[test]
    fn counts_past_u64_range_keep_their_shares() {
        let status = CategoryStatus::new(u64::MAX, u64::MAX, u64::MAX, "");
        assert_eq!(status.total(), 3 * u128::from(u64::MAX));

        let pct = Percentages::compute(&status);
        assert!((pct.sum() - 100.0).abs() < 1e-9, "sum was {}", pct.sum());
        assert!((pct.translated - pct.untranslated).abs() < 1e-9);

        let widths = BarWidths::allocate(200, &status);
        assert_eq!((widths.translated, widths.fuzzy, widths.untranslated), (66, 67, 67));
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let status = CategoryStatus::new(u64::MAX / 2, u64::MAX / 4, 1, "");
        let widths = BarWidths::allocate(u32::MAX, &status);
        assert!(u64::from(widths.translated) + u64::from(widths.fuzzy) <= u64::from(u32::MAX));
    }
}
