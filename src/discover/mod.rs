// src/discover/mod.rs
// =============================================================================
// URL discovery: walk a generated site and collect its external links.
//
// Submodules:
// - html: Extracts links from HTML pages
// - markdown: Extracts links from Markdown sources
//
// This phase never touches the network. Files are read one at a time and
// dropped as soon as they are parsed.
// =============================================================================

mod html;
mod markdown;

pub use html::extract_html_links;
pub use markdown::extract_markdown_links;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoverOptions;
use crate::error::{Result, VerifyError};
use crate::progress::Progress;

/// The deduplicated set of absolute URLs found in a site.
///
/// Sorted so reports and listings come out the same on every run.
pub type DiscoveredUrls = BTreeSet<String>;

/// Walks `options.root` depth-first and returns every unique absolute link.
///
/// Directories named in `options.excluded_dirs` are pruned entirely. Every
/// regular file is announced to `progress`, but only files ending in the
/// HTML suffix (and the Markdown suffix, when enabled) are parsed.
///
/// A missing root or an unreadable entry is an error; malformed markup is not.
pub fn discover(options: &DiscoverOptions, progress: &dyn Progress) -> Result<DiscoveredUrls> {
    info!("Discovering links under {}", options.root.display());

    let mut urls = DiscoveredUrls::new();
    let mut scanned = 0usize;

    let walker = WalkDir::new(&options.root)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, &options.excluded_dirs));

    for entry in walker {
        let entry = entry.map_err(|source| VerifyError::Walk {
            path: options.root.clone(),
            source,
        })?;

        // path().is_file() follows symlinks, so a linked page is still read
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        progress.scanning(&name);

        let links = if name.ends_with(&options.html_suffix) {
            extract_html_links(&read_lossy(entry.path())?)
        } else if options.include_markdown && name.ends_with(&options.markdown_suffix) {
            extract_markdown_links(&read_lossy(entry.path())?)
        } else {
            continue;
        };

        debug!("{} links in {}", links.len(), entry.path().display());
        scanned += 1;
        urls.extend(links);
    }

    progress.finish();
    info!("Found {} unique link(s) in {} file(s)", urls.len(), scanned);

    Ok(urls)
}

// Excluded names only apply to directories; the root itself is never pruned
fn is_excluded(entry: &DirEntry, excluded: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && excluded
            .iter()
            .any(|name| entry.file_name().to_str() == Some(name.as_str()))
}

// Generated pages are UTF-8 in practice; a stray bad byte shouldn't hide
// the rest of the file's links
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| VerifyError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
