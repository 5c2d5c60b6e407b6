// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{default_workers, VerifierConfig};

#[derive(Parser, Debug)]
#[command(
    name = "link-verifier",
    version,
    about = "Find broken external links in a generated static site",
    long_about = "link-verifier walks the HTML output of a static-site generator, collects every \
                  absolute link and checks each one with an HTTP GET. Links that are gone, \
                  erroring or unreachable are reported at the end of the run."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover every external link under ROOT and check that it works
    ///
    /// Example: link-verifier check output/ --fail-on-bad
    Check {
        #[command(flatten)]
        discover: DiscoverArgs,

        /// Output the bad-URL report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Number of links checked at once (default: 4 per CPU)
        #[arg(long, default_value_t = default_workers())]
        workers: usize,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        /// Validate TLS certificates (off by default so expired or
        /// self-signed certificates don't count as broken links)
        #[arg(long)]
        verify_certs: bool,

        /// Host that is never checked (repeatable; replaces the defaults
        /// localhost, 127.0.0.1 and app_server)
        #[arg(long = "local-host", value_name = "HOST")]
        local_hosts: Vec<String>,

        /// Exit with code 1 when any bad link is found
        #[arg(long)]
        fail_on_bad: bool,

        /// How to show progress while running
        #[arg(long, value_enum, default_value_t = ProgressMode::Line)]
        progress: ProgressMode,
    },

    /// List every external link under ROOT without checking anything
    ///
    /// Example: link-verifier discover output/ --json
    Discover {
        #[command(flatten)]
        discover: DiscoverArgs,

        /// Output the links as a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every command that walks a site
#[derive(clap::Args, Debug)]
pub struct DiscoverArgs {
    /// Directory holding the generated site
    pub root: PathBuf,

    /// Only files ending with this suffix are scanned for links
    #[arg(long, default_value = ".html")]
    pub suffix: String,

    /// Directory name to skip (repeatable; replaces the defaults .git and .vscode)
    #[arg(long = "exclude", value_name = "DIR")]
    pub excluded_dirs: Vec<String>,

    /// Also collect links from Markdown (.md) files
    #[arg(long)]
    pub markdown: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressMode {
    /// A single status line, rewritten in place
    Line,
    /// Debug-level log records
    Log,
    /// Nothing
    None,
}

impl DiscoverArgs {
    // Starts from the defaults and applies whatever was given
    pub fn to_config(&self) -> VerifierConfig {
        let mut config = VerifierConfig::new(&self.root);
        config.discover.html_suffix = self.suffix.clone();
        config.discover.include_markdown = self.markdown;
        if !self.excluded_dirs.is_empty() {
            config.discover.excluded_dirs = self.excluded_dirs.clone();
        }
        config
    }
}

pub fn check_config(
    discover: &DiscoverArgs,
    workers: usize,
    timeout: u64,
    verify_certs: bool,
    local_hosts: &[String],
) -> VerifierConfig {
    let mut config = discover.to_config();
    config.probe.workers = workers.max(1);
    config.probe.timeout = Duration::from_secs(timeout);
    config.probe.accept_invalid_certs = !verify_certs;
    if !local_hosts.is_empty() {
        config.probe.local_hosts = local_hosts.to_vec();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::parse_from(["link-verifier", "check", "output"]);
        let Commands::Check {
            discover,
            json,
            workers,
            timeout,
            verify_certs,
            local_hosts,
            fail_on_bad,
            progress,
        } = cli.command
        else {
            panic!("expected check command");
        };

        assert!(!json);
        assert!(!fail_on_bad);
        assert_eq!(progress, ProgressMode::Line);

        let config = check_config(&discover, workers, timeout, verify_certs, &local_hosts);
        assert_eq!(config.discover.root, PathBuf::from("output"));
        assert_eq!(config.discover.excluded_dirs, vec![".git", ".vscode"]);
        assert_eq!(config.probe.workers, default_workers());
        assert_eq!(config.probe.timeout, Duration::from_secs(10));
        assert!(config.probe.accept_invalid_certs);
        assert_eq!(config.probe.local_hosts.len(), 3);
    }

    #[test]
    fn test_check_overrides() {
        let cli = Cli::parse_from([
            "link-verifier",
            "-vv",
            "check",
            "site",
            "--workers",
            "8",
            "--timeout",
            "3",
            "--verify-certs",
            "--local-host",
            "devbox",
            "--exclude",
            "drafts",
            "--markdown",
            "--progress",
            "none",
        ]);
        assert_eq!(cli.verbose, 2);

        let Commands::Check {
            discover,
            workers,
            timeout,
            verify_certs,
            local_hosts,
            progress,
            ..
        } = cli.command
        else {
            panic!("expected check command");
        };

        assert_eq!(progress, ProgressMode::None);
        let config = check_config(&discover, workers, timeout, verify_certs, &local_hosts);
        assert_eq!(config.probe.workers, 8);
        assert_eq!(config.probe.timeout, Duration::from_secs(3));
        assert!(!config.probe.accept_invalid_certs);
        assert_eq!(config.probe.local_hosts, vec!["devbox"]);
        assert_eq!(config.discover.excluded_dirs, vec!["drafts"]);
        assert!(config.discover.include_markdown);
    }
}
