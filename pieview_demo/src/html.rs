// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-page HTML report.

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    /// One or more inline SVG documents, shown side by side.
    pub(crate) svgs: Vec<String>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{title}</title>"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em}\
         .frames{display:flex;flex-wrap:wrap;gap:1em;align-items:flex-start}</style>",
    );
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str(&format!(
            "<section><h2>{}</h2><p>{}</p><div class=\"frames\">\n",
            section.title, section.description
        ));
        for svg in &section.svgs {
            out.push_str(svg);
        }
        out.push_str("</div></section>\n");
    }
    out.push_str("</body></html>\n");
    out
}
