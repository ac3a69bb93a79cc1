// src/render/page.rs
// =============================================================================
// This module turns the month list into a static HTML page.
//
// The page is a fixed shell (title, a small stylesheet, a heading) plus one
// <li> per month linking back to <base><month>/. Months are deduplicated and
// sorted here, so the output only depends on *which* months were found, not
// on the order the fetches finished in.
// =============================================================================

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;

const STYLE: &str = "\
    body { font-family: Arial, sans-serif; padding: 2em; background: #f9f9f9; }
    h2 { color: #333; }
    ul { list-style: none; padding-left: 0; }
    li { margin: 5px 0; font-size: 16px; }";

// Deduplicates and sorts month identifiers
pub fn sorted_unique<I>(months: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    months
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// Renders the complete index page
//
// Parameters:
//   months: month identifiers in any order, duplicates allowed
//   base_url: listing root, ending in '/'
//   title: text for the <title> element
pub fn render_page<I>(months: I, base_url: &str, title: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\" />\n");
    html.push_str(&format!("  <title>{}</title>\n", escape(title)));
    html.push_str(&format!("  <style>\n{}\n  </style>\n", STYLE));
    html.push_str("</head>\n<body>\n  <h2>Available data:</h2>\n  <ul>\n");

    for month in sorted_unique(months) {
        let month = escape(&month);
        html.push_str(&format!(
            "    <li><a href=\"{}{}/\" target=\"_blank\">{}</a></li>\n",
            escape(base_url),
            month,
            month
        ));
    }

    html.push_str("  </ul>\n</body>\n</html>\n");
    html
}

// Writes the page, replacing whatever was at `path`
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

// Escapes the characters that would break out of text or a quoted attribute
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
