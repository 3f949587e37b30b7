use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::finding::Finding;

/// Collects probe results from concurrently running probes.
///
/// Probes only ever call [`record_attempt`](Self::record_attempt) and
/// [`record_finding`](Self::record_finding); readers take snapshots.
pub struct ScanAggregator {
    started: Instant,
    total_requests: AtomicUsize,
    findings: Mutex<Vec<Finding>>,
}

impl ScanAggregator {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            total_requests: AtomicUsize::new(0),
            findings: Mutex::new(Vec::new()),
        }
    }

    pub fn record_attempt(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_finding(&self, finding: Finding) {
        self.findings.lock().push(finding);
    }

    pub fn total_requests(&self) -> usize {
        self.total_requests.load(Ordering::Relaxed)
    }

    pub fn found(&self) -> usize {
        self.findings.lock().len()
    }

    /// Findings in completion order.
    pub fn findings(&self) -> Vec<Finding> {
        self.findings.lock().clone()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings.into_inner()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn summary(&self, target: &str, total_paths: usize) -> ScanSummary {
        ScanSummary {
            target: target.to_string(),
            total_paths,
            total_requests: self.total_requests(),
            found: self.found(),
            elapsed: self.elapsed(),
        }
    }
}

impl Default for ScanAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub target: String,
    pub total_paths: usize,
    pub total_requests: usize,
    pub found: usize,
    pub elapsed: Duration,
}

impl ScanSummary {
    /// Percentage of attempts that produced a finding.
    pub fn success_rate(&self) -> f64 {
        self.found as f64 / self.total_requests.max(1) as f64 * 100.0
    }

    /// Requests per second over the whole scan.
    pub fn request_rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_requests as f64 / secs
        } else {
            0.0
        }
    }
}
