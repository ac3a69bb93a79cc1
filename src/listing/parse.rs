// src/listing/parse.rs
// =============================================================================
// This module pulls subdirectory names out of an HTML directory listing.
//
// Autoindex pages (Apache, nginx) render one <a> per entry, and directories
// are the entries whose href ends in '/'. For example:
//
//   <a href="../">../</a>
//   <a href="2021/">2021/</a>
//   <a href="README.txt">README.txt</a>
//
// gives us ["..", "2021"].
//
// We use the `scraper` crate (html5ever under the hood), which never fails on
// malformed HTML - it just recovers the best tree it can.
// =============================================================================

use scraper::{Html, Selector};

// Extracts directory names from a listing page, in document order
//
// Parameters:
//   html: the listing body (borrowed as &str)
//
// Returns: Vec<String> of hrefs that end in '/', with surrounding slashes removed
pub fn extract_directory_names(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // The selector is a constant, so parsing can only fail on a typo here
    let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(directory_name)
        .collect()
}

// Turns one href into a directory name, or None if it is not a directory
//
// Examples:
//   "2021/"      -> Some("2021")
//   "/2021/"     -> Some("2021")
//   "file.txt"   -> None
fn directory_name(href: &str) -> Option<String> {
    if href.ends_with('/') {
        Some(href.trim_matches('/').to_string())
    } else {
        None
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why filter_map twice?
//    - The first drops <a> tags that have no href (attr returns Option)
//    - The second drops hrefs that are files rather than directories
//    - filter_map = map + "throw away the Nones" in one step
//
// 2. trim_matches vs trim_end_matches
//    - trim_matches('/') strips slashes from both ends
//    - A root link like "/" becomes "" and is later rejected by the filters
// -----------------------------------------------------------------------------
