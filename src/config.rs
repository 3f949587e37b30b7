use std::time::Duration;

use tokio::sync::Semaphore;

use crate::error::ConfigError;

/// Knobs for one scan. Owned by the engine for the scan's lifetime.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum number of probes in flight at once.
    pub concurrency: usize,
    pub timeout: Duration,
    /// Pause after every probe, hit or miss. Zero disables it.
    pub delay: Duration,
    pub follow_redirects: bool,
    pub verify_tls: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: 20,
            timeout: Duration::from_secs(10),
            delay: Duration::ZERO,
            follow_redirects: true,
            verify_tls: false,
        }
    }
}

impl ScanConfig {
    /// Validate raw command-line values.
    pub fn from_cli_values(
        threads: usize,
        timeout_secs: u64,
        delay_secs: f64,
        no_redirects: bool,
        verify_ssl: bool,
    ) -> Result<Self, ConfigError> {
        if threads == 0 || threads > Semaphore::MAX_PERMITS {
            return Err(ConfigError::InvalidConcurrency);
        }
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        // Rejects NaN, negatives and values too large for a Duration.
        let delay = Duration::try_from_secs_f64(delay_secs).map_err(|_| ConfigError::InvalidDelay(delay_secs))?;

        Ok(Self {
            concurrency: threads,
            timeout: Duration::from_secs(timeout_secs),
            delay,
            follow_redirects: !no_redirects,
            verify_tls: verify_ssl,
        })
    }
}
