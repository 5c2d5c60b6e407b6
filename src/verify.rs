// src/verify.rs
// =============================================================================
// The whole run: discover -> probe -> classify -> report.
//
// Results are drained from the probe stream one at a time on the calling
// task, so the report is only ever touched from one place and needs no lock.
// By the time verify() returns every probe has finished.
// =============================================================================

use futures::StreamExt;
use tracing::{debug, info};

use crate::config::VerifierConfig;
use crate::discover::discover;
use crate::error::Result;
use crate::probe::{host_of, probe_all, Prober};
use crate::progress::Progress;
use crate::report::{BadUrlReport, Verdict};

#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    /// Unique URLs found in the site
    pub discovered: usize,
    /// Probe results received (always equal to `discovered`)
    pub probed: usize,
    pub report: BadUrlReport,
}

pub async fn verify<P>(
    config: &VerifierConfig,
    prober: &P,
    progress: &dyn Progress,
) -> Result<VerifyOutcome>
where
    P: Prober + ?Sized,
{
    let urls = discover(&config.discover, progress)?;
    let discovered = urls.len();

    info!(
        "Checking {} unique link(s) with {} worker(s)",
        discovered, config.probe.workers
    );

    let mut results = probe_all(prober, urls, config.probe.workers, &config.probe.local_hosts);
    let mut report = BadUrlReport::new();
    let mut probed = 0usize;

    while let Some(result) = results.next().await {
        probed += 1;
        progress.probed(probed, &host_of(&result.url));

        if report.record(&result) == Verdict::Bad {
            debug!("Bad link {} ({})", result.url, result.code());
        }
    }

    progress.finish();
    info!("{} of {} link(s) are bad", report.len(), probed);

    Ok(VerifyOutcome {
        discovered,
        probed,
        report,
    })
}
