// src/probe/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - One GET per URL (some servers answer HEAD differently from GET)
// - A fixed per-request timeout
// - A User-Agent naming this run: "Bot <random uuid>"
// - Every failure is turned into a ProbeStatus instead of an error
//
// Rust concepts:
// - Traits: Prober lets tests swap the network for a fake
// - async/await: For concurrent network I/O
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use uuid::Uuid;

use super::status::ProbeStatus;
use crate::config::ProbeOptions;
use crate::error::Result;

// Anything that can turn a URL into a ProbeStatus
//
// Implementations must not fail: errors are statuses.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn fetch(&self, url: &str) -> ProbeStatus;
}

// The real prober, backed by one shared reqwest client
//
// The client is built once and reused for every request (connection pooling).
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
    user_agent: String,
}

impl HttpProber {
    pub fn new(options: &ProbeOptions) -> Result<Self> {
        let user_agent = options
            .user_agent
            .clone()
            .unwrap_or_else(bot_user_agent);

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(user_agent.clone())
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()?;

        Ok(Self { client, user_agent })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn fetch(&self, url: &str) -> ProbeStatus {
        match self.client.get(url).send().await {
            // We only care about the status line, the body is never read
            Ok(response) => ProbeStatus::Http(response.status().as_u16()),
            Err(e) => {
                debug!("Probe of {} failed: {}", url, e);
                categorize_error(&e)
            }
        }
    }
}

// "Bot <uuid>": unique per run, so a site owner can tell our requests apart
pub fn bot_user_agent() -> String {
    format!("Bot {}", Uuid::new_v4())
}

// Categorizes reqwest errors
//
// A timeout becomes 504 (what a gateway would have said). Everything else -
// DNS failure, refused connection, TLS handshake, a URL reqwest can't even
// parse - is lumped together as a connection failure.
fn categorize_error(error: &reqwest::Error) -> ProbeStatus {
    if error.is_timeout() {
        ProbeStatus::TimedOut
    } else {
        ProbeStatus::ConnectionFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::{
        matchers::{header_regex, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn options_with_timeout(timeout: Duration) -> ProbeOptions {
        ProbeOptions {
            timeout,
            ..ProbeOptions::default()
        }
    }

    #[test]
    fn test_bot_user_agent_is_fresh() {
        let first = bot_user_agent();
        let second = bot_user_agent();
        assert!(first.starts_with("Bot "));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_returns_http_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let prober = HttpProber::new(&ProbeOptions::default()).unwrap();

        let ok = prober.fetch(&format!("{}/ok", mock_server.uri())).await;
        assert_eq!(ok, ProbeStatus::Http(200));

        let missing = prober.fetch(&format!("{}/missing", mock_server.uri())).await;
        assert_eq!(missing, ProbeStatus::Http(404));
    }

    #[tokio::test]
    async fn test_fetch_sends_bot_user_agent() {
        let mock_server = MockServer::start().await;

        // Only answers 200 when the User-Agent looks like ours
        Mock::given(method("GET"))
            .and(header_regex("user-agent", "^Bot [0-9a-f-]{36}$"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let prober = HttpProber::new(&ProbeOptions::default()).unwrap();
        let status = prober.fetch(&mock_server.uri()).await;
        assert_eq!(status, ProbeStatus::Http(200));
    }

    #[tokio::test]
    async fn test_timeout_maps_to_504() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let prober = HttpProber::new(&options_with_timeout(Duration::from_millis(200))).unwrap();
        let status = prober.fetch(&mock_server.uri()).await;
        assert_eq!(status, ProbeStatus::TimedOut);
        assert_eq!(status.code(), 504);
    }

    #[tokio::test]
    async fn test_refused_connection_maps_to_minus_one() {
        // Grab a free port, then close it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let prober = HttpProber::new(&options_with_timeout(Duration::from_secs(2))).unwrap();
        let status = prober.fetch(&format!("http://127.0.0.1:{}/", port)).await;
        assert_eq!(status, ProbeStatus::ConnectionFailed);
        assert_eq!(status.code(), -1);
    }

    #[tokio::test]
    async fn test_unparseable_url_maps_to_minus_one() {
        let prober = HttpProber::new(&ProbeOptions::default()).unwrap();
        let status = prober.fetch("http://").await;
        assert_eq!(status, ProbeStatus::ConnectionFailed);
    }
}
