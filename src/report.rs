// src/report.rs
// =============================================================================
// Classification of probe results and the final bad-URL report.
//
// Not every error status means a broken link. Plenty of sites answer
// automated clients with 401/403 (bot blocking) or 503 (rate limiting)
// while serving the page fine to a browser, so those are let through:
//
//   -1 (connection failed)    -> bad
//   401, 403                  -> acceptable
//   503                       -> acceptable
//   any other >= 400 (incl. the 504 we use for timeouts) -> bad
//   < 400 (incl. 0 = skipped) -> acceptable
// =============================================================================

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::probe::ProbeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Bad,
    Acceptable,
}

pub fn classify(status: i32) -> Verdict {
    match status {
        -1 => Verdict::Bad,
        401 | 403 | 503 => Verdict::Acceptable,
        code if code >= 400 => Verdict::Bad,
        _ => Verdict::Acceptable,
    }
}

/// Bad URLs and the status each one produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadUrlReport {
    urls: BTreeMap<String, i32>,
}

impl BadUrlReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the result only if it classifies as bad. Returns the verdict.
    pub fn record(&mut self, result: &ProbeResult) -> Verdict {
        let code = result.code();
        let verdict = classify(code);
        if verdict == Verdict::Bad {
            self.urls.insert(result.url.clone(), code);
        }
        verdict
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[cfg(test)]
    pub fn get(&self, url: &str) -> Option<i32> {
        self.urls.get(url).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.urls.iter().map(|(url, code)| (url.as_str(), *code))
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // Human-readable table, one bad URL per row
    pub fn render_text(&self, checked: usize) -> String {
        let mut out = String::new();

        if self.is_empty() {
            out.push_str(&format!("No bad links found ({} checked)\n", checked));
            return out;
        }

        out.push_str(&format!("{:<80} {:>6}\n", "URL", "STATUS"));
        out.push_str(&format!("{}\n", "=".repeat(87)));

        for (url, code) in self.iter() {
            // Truncate URL if too long for display
            let url_display = if url.chars().count() > 77 {
                let cut: String = url.chars().take(77).collect();
                format!("{}...", cut)
            } else {
                url.to_string()
            };
            out.push_str(&format!("{:<80} {:>6}\n", url_display, describe(code)));
        }

        out.push('\n');
        out.push_str("Summary:\n");
        out.push_str(&format!("   Bad: {}\n", self.len()));
        out.push_str(&format!("   Checked: {}\n", checked));
        out
    }
}

impl FromIterator<(String, i32)> for BadUrlReport {
    fn from_iter<T: IntoIterator<Item = (String, i32)>>(iter: T) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}

fn describe(code: i32) -> String {
    match code {
        -1 => "ERROR".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeStatus;

    #[test]
    fn test_classify() {
        assert_eq!(classify(-1), Verdict::Bad);
        assert_eq!(classify(0), Verdict::Acceptable);
        assert_eq!(classify(200), Verdict::Acceptable);
        assert_eq!(classify(301), Verdict::Acceptable);
        assert_eq!(classify(400), Verdict::Bad);
        assert_eq!(classify(401), Verdict::Acceptable);
        assert_eq!(classify(403), Verdict::Acceptable);
        assert_eq!(classify(404), Verdict::Bad);
        assert_eq!(classify(500), Verdict::Bad);
        assert_eq!(classify(503), Verdict::Acceptable);
        assert_eq!(classify(504), Verdict::Bad);
    }

    #[test]
    fn test_record_keeps_only_bad() {
        let mut report = BadUrlReport::new();
        report.record(&ProbeResult::new("https://ok.example/", ProbeStatus::Http(200)));
        report.record(&ProbeResult::new("https://bot.example/", ProbeStatus::Http(403)));
        report.record(&ProbeResult::new("http://localhost/", ProbeStatus::Skipped));
        report.record(&ProbeResult::new("https://gone.example/", ProbeStatus::Http(404)));
        report.record(&ProbeResult::new("https://dead.example/", ProbeStatus::ConnectionFailed));
        report.record(&ProbeResult::new("https://slow.example/", ProbeStatus::TimedOut));

        assert_eq!(report.len(), 3);
        assert_eq!(report.get("https://gone.example/"), Some(404));
        assert_eq!(report.get("https://dead.example/"), Some(-1));
        assert_eq!(report.get("https://slow.example/"), Some(504));
        assert_eq!(report.get("https://bot.example/"), None);
    }

    #[test]
    fn test_render_json() {
        let report: BadUrlReport = vec![("https://example.com/a".to_string(), 404)]
            .into_iter()
            .collect();
        let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "https://example.com/a": 404 }));
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(BadUrlReport::new().render_json().unwrap(), "{}");
    }

    #[test]
    fn test_render_text() {
        let report: BadUrlReport = vec![
            ("https://example.com/a".to_string(), 404),
            ("https://nowhere.example/".to_string(), -1),
        ]
        .into_iter()
        .collect();

        let text = report.render_text(10);
        assert!(text.contains("https://example.com/a"));
        assert!(text.contains("404"));
        assert!(text.contains("ERROR"));
        assert!(text.contains("Bad: 2"));
        assert!(text.contains("Checked: 10"));

        assert!(BadUrlReport::new().render_text(5).contains("No bad links found (5 checked)"));
    }
}
