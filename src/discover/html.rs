// src/discover/html.rs
// =============================================================================
// This module extracts external links from generated HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never rejects a document: broken markup
//   is repaired the way a browser would, so a bad page can't stop the scan
//
// Only absolute http(s) links are kept. Relative links point back into the
// site itself and are not this tool's business.
// =============================================================================

use scraper::{Html, Selector};
use std::sync::OnceLock;

// The "a[href]" selector, parsed once
//
// Selector::parse only fails on an invalid selector; this one is a constant
// and known to be valid, so a failure here is a programmer error.
fn anchor_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("a[href]").unwrap())
}

// Extracts all absolute links from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> with the href of every matching anchor, verbatim and
// in document order (duplicates included; the caller deduplicates)
//
// Example:
//   html = "<a href='https://example.com/a'>A</a><a href='/docs'>Docs</a>"
//   result = ["https://example.com/a"]
pub fn extract_html_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(anchor_selector())
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| is_checkable_link(href))
        .map(|href| href.to_string())
        .collect()
}

// Checks if an href should be probed
//
// We skip:
// - relative links ("/about", "../index.html", "#top")
// - mailto:, tel:, javascript:, data: links
pub(crate) fn is_checkable_link(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - "a[href]" means "all <a> tags that have an href attribute"
//
// 2. What is OnceLock?
//    - A cell that is written exactly once, the first time it is needed
//    - Every later call gets the same value back
//    - Here it saves re-parsing the selector for every file
//
// 3. What does filter_map do?
//    - Runs a closure that returns Option, keeps only the Some values
//    - .attr("href") returns Option<&str>, so anchors without a usable
//      href just drop out
// -----------------------------------------------------------------------------
