use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, WWW_AUTHENTICATE};

use crate::wordlist::ADMIN_INDICATORS;

/// Status codes that count as a hit on their own.
pub const INTERESTING_STATUSES: &[u16] = &[200, 401, 403, 301, 302];

static TITLE_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").ok());

/// A response is interesting on an allow-listed status, or on a Basic/Digest auth challenge.
pub fn is_interesting(status: u16, headers: &HeaderMap) -> bool {
    if INTERESTING_STATUSES.contains(&status) {
        return true;
    }

    headers.get_all(WWW_AUTHENTICATE).iter().any(|v| {
        let v = String::from_utf8_lossy(v.as_bytes()).to_lowercase();
        v.contains("basic") || v.contains("digest")
    })
}

/// First `<title>` text, trimmed. `None` when missing or blank.
pub fn extract_title(body: &str) -> Option<String> {
    let re = TITLE_RE.as_ref()?;
    let caps = re.captures(body)?;
    let title = caps.get(1)?.as_str().trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Indicator keywords present in the body, in list order.
pub fn extract_indicators(body: &str) -> Vec<String> {
    let lower = body.to_lowercase();
    ADMIN_INDICATORS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}
