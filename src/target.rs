use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// Normalized scan base: absolute http(s) URL, non-empty host, no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    base: String,
    url: Url,
}

impl Target {
    /// Accepts a bare host (`example.com`) or a full URL. Bare hosts default to https.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };
        let base = with_scheme.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base).map_err(|_| ConfigError::InvalidTarget(base.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidTarget(base));
        }
        match parsed.host_str() {
            Some(h) if !h.is_empty() => {}
            _ => return Err(ConfigError::InvalidTarget(base)),
        }

        Ok(Self { base, url: parsed })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Resolve a candidate path against the base as a relative reference.
    /// The base's last path segment is replaced: `https://h/app` + `admin` is `https://h/admin`.
    pub fn join(&self, path: &str) -> Result<Url, ConfigError> {
        self.url
            .join(path)
            .map_err(|_| ConfigError::InvalidTarget(format!("{}/{}", self.base, path)))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
