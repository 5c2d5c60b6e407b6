// src/probe/status.rs
// =============================================================================
// The outcome of probing one URL.
//
// Every failure mode is folded into a status so that a single bad link can
// never abort a run. Downstream code (classification, the report) works on
// the integer code:
//
//   Skipped          ->   0   local host, never requested
//   ConnectionFailed ->  -1   DNS, refused, TLS, malformed URL, ...
//   TimedOut         -> 504   request exceeded its timeout
//   Http(code)       -> code  whatever the server answered
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Host is a local dev-server alias
    Skipped,
    /// No response could be obtained
    ConnectionFailed,
    /// The request timed out
    TimedOut,
    /// The server answered with this status code
    Http(u16),
}

impl ProbeStatus {
    pub fn code(&self) -> i32 {
        match self {
            ProbeStatus::Skipped => 0,
            ProbeStatus::ConnectionFailed => -1,
            ProbeStatus::TimedOut => 504,
            ProbeStatus::Http(code) => i32::from(*code),
        }
    }
}

/// One probe per discovered URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// The URL as discovered (before trailing punctuation was trimmed)
    pub url: String,
    pub status: ProbeStatus,
}

impl ProbeResult {
    pub fn new(url: impl Into<String>, status: ProbeStatus) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }

    pub fn code(&self) -> i32 {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ProbeStatus::Skipped.code(), 0);
        assert_eq!(ProbeStatus::ConnectionFailed.code(), -1);
        assert_eq!(ProbeStatus::TimedOut.code(), 504);
        assert_eq!(ProbeStatus::Http(404).code(), 404);
    }
}
