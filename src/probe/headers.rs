use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

use crate::wordlist::USER_AGENTS;

/// Picks the User-Agent for each request.
pub trait UserAgentSource: Send + Sync {
    fn pick(&self) -> String;
}

/// Uniform choice over the built-in browser pool.
pub struct RandomUserAgent {
    rng: Mutex<StdRng>,
    pool: Vec<String>,
}

impl RandomUserAgent {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence, for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            pool: USER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for RandomUserAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentSource for RandomUserAgent {
    fn pick(&self) -> String {
        let mut rng = self.rng.lock();
        self.pool.choose(&mut *rng).cloned().unwrap_or_default()
    }
}

/// Always the same User-Agent.
pub struct FixedUserAgent(pub String);

impl UserAgentSource for FixedUserAgent {
    fn pick(&self) -> String {
        self.0.clone()
    }
}

/// Browser-like request headers.
pub fn browser_headers(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(ua) = HeaderValue::from_str(user_agent) {
        headers.insert(USER_AGENT, ua);
    }
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}
