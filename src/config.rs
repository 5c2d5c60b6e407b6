// src/config.rs
// =============================================================================
// Runtime configuration for a verification run.
//
// Every knob has a default matching how the verifier has always behaved:
// - scan `.html` files, skipping `.git` and `.vscode`
// - 4 workers per available CPU
// - 10 second request timeout
// - certificate validation OFF (see `accept_invalid_certs`)
// - `localhost`, `127.0.0.1` and `app_server` are never probed
//
// The CLI (src/cli.rs) builds a VerifierConfig from flags; tests build one
// directly and override what they need.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HTML_SUFFIX: &str = ".html";
pub const DEFAULT_MARKDOWN_SUFFIX: &str = ".md";
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", ".vscode"];
pub const DEFAULT_LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "app_server"];
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to look for links and which files count.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    pub root: PathBuf,
    pub html_suffix: String,
    pub excluded_dirs: Vec<String>,
    /// Also collect links from Markdown sources sitting in the tree
    pub include_markdown: bool,
    pub markdown_suffix: String,
}

impl DiscoverOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            html_suffix: DEFAULT_HTML_SUFFIX.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            include_markdown: false,
            markdown_suffix: DEFAULT_MARKDOWN_SUFFIX.to_string(),
        }
    }
}

/// How each URL gets probed.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Maximum number of probes in flight at once
    pub workers: usize,
    pub timeout: Duration,
    /// Skip TLS certificate validation.
    ///
    /// On by default: the links come from our own generated site, and a
    /// target with an expired or self-signed certificate still works for
    /// a human visitor. Turn it off with `--verify-certs`.
    pub accept_invalid_certs: bool,
    /// Hosts that are never probed; they get status 0
    pub local_hosts: Vec<String>,
    /// None means "Bot <fresh uuid>"
    pub user_agent: Option<String>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
            local_hosts: DEFAULT_LOCAL_HOSTS.iter().map(|h| h.to_string()).collect(),
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerifierConfig {
    pub discover: DiscoverOptions,
    pub probe: ProbeOptions,
}

impl VerifierConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            discover: DiscoverOptions::new(root),
            probe: ProbeOptions::default(),
        }
    }
}

/// 4 workers per available processing unit.
pub fn default_workers() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    cpus * 4
}
