use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONNECTION};
use reqwest::Client;
use url::Url;

use crate::error::ProbeError;

/// A received response whose body has not been read yet.
#[async_trait]
pub trait TransportResponse: Send {
    fn status(&self) -> u16;
    /// URL the response was finally served from (after redirects, if followed).
    fn final_url(&self) -> &Url;
    fn headers(&self) -> &HeaderMap;
    async fn body(self: Box<Self>) -> Result<Vec<u8>, ProbeError>;
}

/// Sends one GET. Redirect and TLS policy belong to the implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url, headers: HeaderMap) -> Result<Box<dyn TransportResponse>, ProbeError>;
}

/// Production transport backed by a pooled `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
    timeout: std::time::Duration,
}

impl ReqwestTransport {
    pub fn new(client: Client, timeout: std::time::Duration) -> Self {
        Self { client, timeout }
    }

    fn classify_error(&self, e: reqwest::Error) -> ProbeError {
        if e.is_timeout() {
            ProbeError::Timeout(self.timeout)
        } else {
            ProbeError::Request(e.to_string())
        }
    }
}

struct ReqwestResponse {
    inner: reqwest::Response,
    timeout: std::time::Duration,
}

#[async_trait]
impl TransportResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn final_url(&self) -> &Url {
        self.inner.url()
    }

    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    async fn body(self: Box<Self>) -> Result<Vec<u8>, ProbeError> {
        let timeout = self.timeout;
        match self.inner.bytes().await {
            Ok(b) => Ok(b.to_vec()),
            Err(e) if e.is_timeout() => Err(ProbeError::Timeout(timeout)),
            Err(e) => Err(ProbeError::Request(e.to_string())),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url, mut headers: HeaderMap) -> Result<Box<dyn TransportResponse>, ProbeError> {
        // hyper manages keep-alive itself, and the header is illegal on HTTP/2.
        headers.remove(CONNECTION);
        let resp = self
            .client
            .get(url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;
        Ok(Box::new(ReqwestResponse { inner: resp, timeout: self.timeout }))
    }
}
