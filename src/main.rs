// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the report
// 5. Exit with proper code:
//      0 = finished (bad links or not, unless --fail-on-bad)
//      1 = bad links found and --fail-on-bad was given
//      2 = the run itself failed (e.g. the site directory doesn't exist)
// =============================================================================

mod cli;
mod config;
mod discover;
mod error;
mod logging;
mod probe;
mod progress;
mod report;
mod verify;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::{check_config, Cli, Commands, DiscoverArgs, ProgressMode};
use probe::HttpProber;
use progress::{LineProgress, LogProgress, NoProgress, Progress};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check {
            discover,
            json,
            workers,
            timeout,
            verify_certs,
            local_hosts,
            fail_on_bad,
            progress,
        } => {
            let config = check_config(&discover, workers, timeout, verify_certs, &local_hosts);
            handle_check(config, json, fail_on_bad, progress).await
        }
        Commands::Discover { discover, json } => handle_discover(&discover, json),
    }
}

// Handles the 'check' subcommand
async fn handle_check(
    config: config::VerifierConfig,
    json: bool,
    fail_on_bad: bool,
    mode: ProgressMode,
) -> Result<i32> {
    let prober = HttpProber::new(&config.probe)?;
    info!("Probing as \"{}\"", prober.user_agent());

    let progress = make_progress(mode);
    let outcome = verify::verify(&config, &prober, progress.as_ref())
        .await
        .with_context(|| format!("Checking links under {}", config.discover.root.display()))?;

    info!(
        "{} link(s) discovered, {} checked",
        outcome.discovered, outcome.probed
    );

    if json {
        println!("{}", outcome.report.render_json()?);
    } else {
        print!("{}", outcome.report.render_text(outcome.probed));
    }

    if fail_on_bad && !outcome.report.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'discover' subcommand: no network at all
fn handle_discover(args: &DiscoverArgs, json: bool) -> Result<i32> {
    let config = args.to_config();
    let urls = discover::discover(&config.discover, &NoProgress)
        .with_context(|| format!("Discovering links under {}", config.discover.root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&urls)?);
    } else {
        for url in &urls {
            println!("{}", url);
        }
    }

    Ok(0)
}

fn make_progress(mode: ProgressMode) -> Box<dyn Progress> {
    match mode {
        ProgressMode::Line => Box::new(LineProgress::new()),
        ProgressMode::Log => Box::new(LogProgress),
        ProgressMode::None => Box::new(NoProgress),
    }
}
