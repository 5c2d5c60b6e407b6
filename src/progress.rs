// src/progress.rs
// =============================================================================
// Progress reporting for long runs.
//
// The pipeline only talks to the `Progress` trait, so the terminal output
// can be swapped for log records (or nothing at all) without touching the
// discovery or probing code.
//
// Implementations:
// - LineProgress: one status line on stderr, rewritten in place with '\r'
// - LogProgress:  one tracing::debug! record per event
// - NoProgress:   drops everything
// =============================================================================

use std::io::Write;
use std::sync::Mutex;

pub trait Progress: Send + Sync {
    /// Discovery is looking at `file`
    fn scanning(&self, file: &str);
    /// Probe number `count` just finished for `host`
    fn probed(&self, count: usize, host: &str);
    /// The current phase is over
    fn finish(&self) {}
}

pub fn scanning_message(file: &str) -> String {
    format!("Currently checking: file={}", file)
}

pub fn probed_message(count: usize, host: &str) -> String {
    format!("Currently checking: id={} host={}", count, host)
}

// Pads `message` to the longest message seen so far so a shorter line
// fully covers the previous one when written over it.
#[derive(Debug, Default)]
pub struct LinePadder {
    max_len: usize,
}

impl LinePadder {
    pub fn pad(&mut self, message: &str) -> String {
        let len = message.chars().count();
        if len > self.max_len {
            self.max_len = len;
        }
        format!("{:<width$}", message, width = self.max_len)
    }
}

/// Rewrites a single stderr line for every event.
#[derive(Debug, Default)]
pub struct LineProgress {
    padder: Mutex<LinePadder>,
}

impl LineProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self, message: &str) {
        let line = match self.padder.lock() {
            Ok(mut padder) => padder.pad(message),
            Err(_) => message.to_string(),
        };
        let mut stderr = std::io::stderr().lock();
        // Progress is best effort; a closed stderr must not stop the run
        let _ = write!(stderr, "\r{}", line);
        let _ = stderr.flush();
    }
}

impl Progress for LineProgress {
    fn scanning(&self, file: &str) {
        self.write(&scanning_message(file));
    }

    fn probed(&self, count: usize, host: &str) {
        self.write(&probed_message(count, host));
    }

    fn finish(&self) {
        eprintln!();
        if let Ok(mut padder) = self.padder.lock() {
            *padder = LinePadder::default();
        }
    }
}

pub struct LogProgress;

impl Progress for LogProgress {
    fn scanning(&self, file: &str) {
        tracing::debug!(file, "scanning");
    }

    fn probed(&self, count: usize, host: &str) {
        tracing::debug!(count, host, "probed");
    }
}

pub struct NoProgress;

impl Progress for NoProgress {
    fn scanning(&self, _file: &str) {}
    fn probed(&self, _count: usize, _host: &str) {}
}
