use thiserror::Error;

/// Problems detected before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    #[error("concurrency must be between 1 and {}", tokio::sync::Semaphore::MAX_PERMITS)]
    InvalidConcurrency,

    #[error("timeout must be at least 1 second")]
    InvalidTimeout,

    #[error("delay must be a non-negative number of seconds, got {0}")]
    InvalidDelay(f64),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Per-probe failure. Never escapes the engine; it is counted and logged.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("{0}")]
    Request(String),
}

