// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for report rendering

use transtat::config::{MissingNamePolicy, ReportConfig, Settings};
use transtat::i18n::LanguageNames;
use transtat::report::render_report;
use transtat::status::load_status;
use transtat::types::*;
use std::path::Path;

fn entry(code: &str, t: u64, f: u64, u: u64, stamp: &str) -> StatusEntry {
    StatusEntry::new(code, CategoryStatus::new(t, f, u, stamp))
}

#[test]
fn test_worked_example() {
    let report = render_report(
        &LanguageNames::builtin(),
        &[entry("cs", 80, 10, 10, "2024-01-01")],
        &ReportConfig::default(),
    )
    .expect("report should render");

    let row = &report.rows[0];
    assert_eq!(row.percentages.translated, 80.0);
    assert_eq!(row.percentages.fuzzy, 10.0);
    assert_eq!(row.percentages.untranslated, 10.0);
    assert_eq!(row.widths.sum(), 200);
    assert_eq!(row.class, RowClass::Incomplete);
    assert_eq!(row.counts.last_update, "2024-01-01");
}

#[test]
fn test_zero_total_is_broken() {
    let names: LanguageNames = [("xx", "Nowhere")].into_iter().collect();
    let report = render_report(&names, &[entry("xx", 0, 0, 0, "-")], &ReportConfig::default())
        .expect("broken rows must not fail the report");

    let row = &report.rows[0];
    assert!(row.broken);
    assert_eq!(row.class, RowClass::Error);
    assert_eq!(row.percentages.sum(), 0.0);
    assert_eq!(row.widths.sum(), 0);
    assert!(row.segments().is_empty(), "broken rows draw no bar");
    assert_eq!(report.broken_rows().count(), 1);
}

#[test]
fn test_sorted_by_display_name() {
    let names: LanguageNames = [("da", "Danish"), ("cs", "Czech")].into_iter().collect();
    let report = render_report(
        &names,
        &[entry("da", 1, 0, 0, ""), entry("cs", 1, 0, 0, "")],
        &ReportConfig::default(),
    )
    .unwrap();

    let codes: Vec<&str> = report.rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["cs", "da"]);
}

#[test]
fn test_equal_names_keep_input_order() {
    // en and en_GB both resolve to "English"
    let names = LanguageNames::builtin();
    let report = render_report(
        &names,
        &[
            entry("en_GB", 1, 0, 0, ""),
            entry("tr", 1, 0, 0, ""),
            entry("en", 1, 0, 0, ""),
            entry("en_US", 1, 0, 0, ""),
        ],
        &ReportConfig::default(),
    )
    .unwrap();

    let codes: Vec<&str> = report.rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["en_GB", "en", "en_US", "tr"]);
}

#[test]
fn test_region_code_uses_base_name() {
    let report = render_report(
        &LanguageNames::builtin(),
        &[entry("en_US", 5, 0, 0, "")],
        &ReportConfig::default(),
    )
    .unwrap();
    assert_eq!(report.rows[0].name, "English");
    assert_eq!(report.rows[0].class, RowClass::Complete);
    assert_eq!(report.rows[0].filename, "en_US.po");
}

#[test]
fn test_template_row_links_pot() {
    let config = ReportConfig {
        base_url: "https://example.org/po/".to_string(),
        template_filename: "app.pot".to_string(),
        ..ReportConfig::default()
    };
    let report = render_report(&LanguageNames::builtin(), &[], &config).unwrap();
    assert!(report.rows.is_empty());
    assert_eq!(report.template.filename, "app.pot");
    assert_eq!(
        report.template.download_url,
        "https://example.org/po/app.pot?rev=HEAD&content-type=text/plain"
    );
}

#[test]
fn test_download_urls() {
    let report = render_report(
        &LanguageNames::builtin(),
        &[entry("de", 3, 2, 1, "")],
        &ReportConfig::default(),
    )
    .unwrap();
    assert_eq!(
        report.rows[0].download_url,
        "http://cvs.savannah.gnu.org/viewcvs/gnubg/gnubg/po/de.po?rev=HEAD&content-type=text/plain"
    );
}

#[test]
fn test_missing_name_policies() {
    let names = LanguageNames::builtin();
    let status = [entry("pt_BR", 1, 0, 0, ""), entry("cs", 1, 0, 0, "")];

    let legacy = ReportConfig {
        missing_name: MissingNamePolicy::Legacy,
        ..ReportConfig::default()
    };
    let report = render_report(&names, &status, &legacy).unwrap();
    // the empty name sorts before everything else
    assert_eq!(report.rows[0].code, "pt_BR");
    assert_eq!(report.rows[0].name, "");

    let report = render_report(&names, &status, &ReportConfig::default()).unwrap();
    assert_eq!(report.rows[1].name, "pt_BR");

    let strict = ReportConfig {
        missing_name: MissingNamePolicy::Strict,
        ..ReportConfig::default()
    };
    assert!(matches!(
        render_report(&names, &status, &strict),
        Err(transtat::ReportError::MissingDisplayName { .. })
    ));
}

#[test]
fn test_zero_count_segments_are_omitted() {
    let report = render_report(
        &LanguageNames::builtin(),
        &[entry("cs", 10, 0, 5, "")],
        &ReportConfig::default(),
    )
    .unwrap();
    let kinds: Vec<SegmentKind> = report.rows[0].segments().iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SegmentKind::Translated, SegmentKind::Untranslated]);
}

#[test]
fn test_tiny_share_keeps_zero_width_segment() {
    // 0.2 px and 0.4 px boundaries both floor to 0; the last segment takes the rest
    let report = render_report(
        &LanguageNames::builtin(),
        &[entry("cs", 1, 1, 998, "")],
        &ReportConfig::default(),
    )
    .unwrap();
    let widths: Vec<u32> = report.rows[0].segments().iter().map(|s| s.width).collect();
    assert_eq!(widths, vec![0, 0, 200]);
}

#[test]
fn test_authors_shown_when_enabled() {
    let mut config = ReportConfig {
        show_author: true,
        ..ReportConfig::default()
    };
    config.authors.insert("cs".to_string(), "Petr Kadlec".to_string());
    let report = render_report(
        &LanguageNames::builtin(),
        &[entry("cs", 1, 0, 0, ""), entry("da", 1, 0, 0, "")],
        &config,
    )
    .unwrap();
    assert_eq!(report.rows[0].author.as_deref(), Some("Petr Kadlec"));
    assert_eq!(report.rows[1].author, None);
}

#[test]
fn test_demo_data() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let settings = Settings::load(&root.join("transtat.toml")).expect("demo config should load");
    let entries = load_status(&root.join("catstatus.json")).expect("demo status should load");
    let report = render_report(&settings.languages, &entries, &settings.report).unwrap();

    let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Czech", "Danish", "English", "German", "Japanese"]);
    assert_eq!(report.count_by_class(RowClass::Complete), 1);
    assert_eq!(report.count_by_class(RowClass::Error), 1);
    assert_eq!(report.rows[0].author.as_deref(), Some("Petr Kadlec"));
    for row in report.rows.iter().filter(|r| !r.broken) {
        assert_eq!(row.widths.sum(), settings.report.bar_width);
    }
}
