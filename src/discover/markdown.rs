// src/discover/markdown.rs
// =============================================================================
// This module extracts external links from Markdown sources.
//
// Off by default (enable with `--markdown`): a site's content directory
// often lives next to its output, and links written in the posts can be
// checked before the generator has even run.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Is fast and memory-efficient (it's a streaming parser)
// =============================================================================

use pulldown_cmark::{Event, Parser, Tag};

use super::html::is_checkable_link;

// Extracts all HTTP/HTTPS links from Markdown text
//
// Returns: Vec<String> with every link destination, in document order
//
// Example input:
//   "Check out [Rust](https://www.rust-lang.org)!"
//
// Example output:
//   vec!["https://www.rust-lang.org"]
pub fn extract_markdown_links(markdown: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Create a Markdown parser
    // This produces an iterator of events as it parses the text
    let parser = Parser::new(markdown);

    for event in parser {
        // In pulldown-cmark 0.9, Link is Tag::Link(link_type, dest_url, title).
        // Autolinks (<https://...>) arrive through the same tag.
        if let Event::Start(Tag::Link(_link_type, dest_url, _title)) = event {
            if is_checkable_link(&dest_url) {
                links.push(dest_url.to_string());
            }
        }
    }

    links
}
