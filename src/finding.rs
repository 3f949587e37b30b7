use serde::{Deserialize, Serialize};

/// A path whose response looked like an admin interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub url: String,
    pub status_code: u16,
    /// Seconds until response headers arrived.
    pub response_time: f64,
    /// Final URL after redirects, only when it differs from `url`.
    pub redirect_url: Option<String>,
    /// Body length in bytes.
    pub content_length: usize,
    pub server: Option<String>,
    pub title: Option<String>,
    pub admin_indicators: Vec<String>,
}

/// What a single probe produced.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    Finding(Finding),
    NoFinding { url: String, status_code: u16 },
    Timeout { url: String },
    Failed { url: String, error: String },
}

impl ProbeOutcome {
    pub fn url(&self) -> &str {
        match self {
            ProbeOutcome::Finding(f) => &f.url,
            ProbeOutcome::NoFinding { url, .. }
            | ProbeOutcome::Timeout { url }
            | ProbeOutcome::Failed { url, .. } => url,
        }
    }

    pub fn finding(&self) -> Option<&Finding> {
        match self {
            ProbeOutcome::Finding(f) => Some(f),
            _ => None,
        }
    }
}
