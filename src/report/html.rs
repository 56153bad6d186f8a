// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML status table
//!
//! Produces the `<table class="translations">` fragment embedded in the
//! project's translation page. Row and cell classes are what the page's
//! stylesheet targets, so they are kept stable.

use crate::config::BarImages;
use crate::types::{Report, ReportRow, SegmentKind, TemplateRow};
use std::fmt::Write;

const HEADER: &[(&str, &str)] = &[
    ("lang", "language"),
    ("trans", "translated"),
    ("fuzzy", "fuzzy"),
    ("untrans", "untrans."),
    ("graph", "graph"),
    ("lastupdate", "last updated"),
    ("download", "download"),
];

const BROKEN_MARKER: &str = "<b>(BROKEN!)</b>";

/// Escape text for element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct HtmlTable<'a> {
    images: &'a BarImages,
}

impl<'a> HtmlTable<'a> {
    pub fn new(images: &'a BarImages) -> Self {
        Self { images }
    }

    pub fn render(&self, report: &Report) -> String {
        let mut html = String::new();
        html.push_str("<table class=\"translations\">\n");

        html.push_str("    <tr>\n");
        for (class, label) in HEADER {
            let _ = writeln!(html, "        <th class=\"{}\">{}</th>", class, label);
        }
        html.push_str("    </tr>\n");

        for row in &report.rows {
            html.push_str(&self.render_row(row));
            html.push('\n');
        }

        html.push_str("<tr></tr>");
        html.push_str(&render_template_row(&report.template));
        html.push('\n');
        html.push_str("</table>\n");
        html
    }

    pub fn render_row(&self, row: &ReportRow) -> String {
        let mut html = String::new();
        let _ = write!(html, "<tr class=\"{}\">", row.class.css_class());

        let _ = write!(
            html,
            "<td class=\"lang\">{} ({})",
            escape_html(&row.name),
            escape_html(&row.code)
        );
        if row.broken {
            let _ = write!(html, " {}", BROKEN_MARKER);
        }
        if let Some(author) = &row.author {
            let _ = write!(html, " <span class=\"author\">{}</span>", escape_html(author));
        }
        html.push_str("</td>");

        let _ = write!(html, "<td class=\"trans\">{:.1} %</td>", row.percentages.translated);
        let _ = write!(html, "<td class=\"fuzzy\">{:.1} %</td>", row.percentages.fuzzy);
        let _ = write!(html, "<td class=\"untrans\">{:.1} %</td>", row.percentages.untranslated);

        html.push_str("<td class=\"graph\">");
        for segment in row.segments() {
            let _ = write!(
                html,
                "<img src=\"{}\" width=\"{}\" height=\"{}\"/>",
                escape_html(self.image_for(segment.kind)),
                segment.width,
                self.images.height
            );
        }
        html.push_str("</td>");

        let _ = write!(
            html,
            "<td class=\"lastupdate\">{}</td>",
            escape_html(&row.counts.last_update)
        );
        let _ = write!(
            html,
            "<td class=\"download\"><a href=\"{}\">{}</a></td>",
            escape_html(&row.download_url),
            escape_html(&row.filename)
        );
        html.push_str("</tr>");
        html
    }

    fn image_for(&self, kind: SegmentKind) -> &str {
        match kind {
            SegmentKind::Translated => &self.images.translated,
            SegmentKind::Fuzzy => &self.images.fuzzy,
            SegmentKind::Untranslated => &self.images.untranslated,
        }
    }
}

fn render_template_row(template: &TemplateRow) -> String {
    let mut html = String::from("<tr class=\"template\"><td>Template file</td>");
    html.push_str(&"<td></td>".repeat(5));
    let _ = write!(
        html,
        "<td class=\"download\"><a href=\"{}\">{}</a></td>",
        escape_html(&template.download_url),
        escape_html(&template.filename)
    );
    html.push_str("</tr>");
    html
}
