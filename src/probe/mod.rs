// src/probe/mod.rs
// =============================================================================
// Concurrent probing of discovered URLs.
//
// Submodules:
// - status: ProbeStatus / ProbeResult, the outcome of one probe
// - http: the Prober trait and its reqwest implementation
//
// probe_all() runs at most `workers` probes at once and yields each result
// as soon as it is ready, NOT in input order. The consumer can report
// progress and classify while slow probes are still in flight.
// =============================================================================

mod http;
mod status;

pub use http::{HttpProber, Prober};
pub use status::{ProbeResult, ProbeStatus};

use futures::stream::{self, Stream, StreamExt};
use url::Url;

// Strips trailing '?' and '.' characters
//
// Loose markup sometimes drags sentence punctuation into an href:
//   "https://example.com/page." -> "https://example.com/page"
//   "https://example.com/?"     -> "https://example.com/"
pub fn clean_url(url: &str) -> &str {
    url.trim_end_matches(|c: char| c == '?' || c == '.')
}

// Host portion of a URL, or "" when it has none (or doesn't parse)
pub fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host.to_string()))
        .unwrap_or_default()
}

// True when the URL points at one of the local dev-server hosts
pub fn is_local(url: &str, local_hosts: &[String]) -> bool {
    let host = host_of(url);
    !host.is_empty() && local_hosts.iter().any(|local| local.eq_ignore_ascii_case(&host))
}

// Probes a single URL
//
// Local URLs short-circuit to Skipped without reaching the prober. The host
// is taken from the cleaned URL, the same one a request would go to, so
// "http://localhost:8000." is local too. The result always carries the URL
// as discovered.
pub async fn probe_one<P>(prober: &P, url: String, local_hosts: &[String]) -> ProbeResult
where
    P: Prober + ?Sized,
{
    let cleaned = clean_url(&url);
    if is_local(cleaned, local_hosts) {
        return ProbeResult::new(url, ProbeStatus::Skipped);
    }

    let status = prober.fetch(cleaned).await;
    ProbeResult::new(url, status)
}

// Probes every URL with at most `workers` requests in flight
//
// Returns a stream of results in completion order. Each URL yields exactly
// one result; the stream ends once every probe has finished.
pub fn probe_all<'a, P, I>(
    prober: &'a P,
    urls: I,
    workers: usize,
    local_hosts: &'a [String],
) -> impl Stream<Item = ProbeResult> + 'a
where
    P: Prober + ?Sized,
    I: IntoIterator<Item = String>,
    I::IntoIter: 'a,
{
    let probes = urls
        .into_iter()
        .map(move |url| probe_one(prober, url, local_hosts));

    // .buffer_unordered(n) means: run up to n probes at once, hand back
    // results as they complete
    stream::iter(probes).buffer_unordered(workers.max(1))
}
