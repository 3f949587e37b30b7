use std::sync::Arc;
use std::time::Instant;

use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::header::SERVER;
use tokio::sync::{mpsc, Semaphore};
use url::Url;

use crate::aggregate::ScanAggregator;
use crate::config::ScanConfig;
use crate::error::ProbeError;
use crate::finding::{Finding, ProbeOutcome};
use crate::probe::classify::{extract_indicators, extract_title, is_interesting};
use crate::probe::headers::{browser_headers, UserAgentSource};
use crate::probe::transport::Transport;
use crate::target::Target;

/// Bounded-concurrency prober. One instance per scan.
pub struct ProbeEngine {
    transport: Arc<dyn Transport>,
    user_agents: Arc<dyn UserAgentSource>,
    config: ScanConfig,
    events: Option<mpsc::UnboundedSender<ProbeOutcome>>,
}

impl ProbeEngine {
    pub fn new(transport: Arc<dyn Transport>, user_agents: Arc<dyn UserAgentSource>, config: ScanConfig) -> Self {
        Self { transport, user_agents, config, events: None }
    }

    /// Stream every probe outcome to `tx` as it completes.
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<ProbeOutcome>) -> Self {
        self.events = Some(tx);
        self
    }

    /// Probe every path against `target`, recording into `aggregator`.
    ///
    /// All paths are queued up front; a semaphore admits at most `concurrency` at a time.
    /// Completion order is arbitrary. Dropping the returned future abandons in-flight probes.
    pub async fn run(&self, target: &Target, paths: &[String], aggregator: &ScanAggregator) {
        let gate = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut pending = FuturesUnordered::new();

        for path in paths {
            let gate = gate.clone();
            pending.push(async move {
                // The semaphore is never closed.
                let Ok(_permit) = gate.acquire_owned().await else {
                    return;
                };
                let outcome = self.probe_path(target, path).await;
                aggregator.record_attempt();
                if let ProbeOutcome::Finding(f) = &outcome {
                    aggregator.record_finding(f.clone());
                }
                if let Some(tx) = &self.events {
                    let _ = tx.send(outcome);
                }
                if !self.config.delay.is_zero() {
                    tokio::time::sleep(self.config.delay).await;
                }
            });
        }

        while pending.next().await.is_some() {}
    }

    /// One probe. Never fails: transport errors and timeouts become outcomes.
    pub async fn probe_path(&self, target: &Target, path: &str) -> ProbeOutcome {
        let url = match target.join(path) {
            Ok(u) => u,
            Err(e) => {
                tracing::info!(path, error = %e, "skipping unjoinable path");
                return ProbeOutcome::Failed { url: format!("{}/{}", target, path), error: e.to_string() };
            }
        };
        let url_str = url.to_string();

        match tokio::time::timeout(self.config.timeout, self.fetch(&url)).await {
            Ok(Ok(outcome)) => {
                if let ProbeOutcome::Finding(f) = &outcome {
                    tracing::debug!(url = %f.url, status = f.status_code, "found");
                } else {
                    tracing::debug!(url = %url_str, "not interesting");
                }
                outcome
            }
            Ok(Err(ProbeError::Timeout(_))) | Err(_) => {
                tracing::info!(url = %url_str, "[TIMEOUT]");
                ProbeOutcome::Timeout { url: url_str }
            }
            Ok(Err(e)) => {
                tracing::info!(url = %url_str, error = %e, "[ERROR]");
                ProbeOutcome::Failed { url: url_str, error: e.to_string() }
            }
        }
    }

    async fn fetch(&self, url: &Url) -> Result<ProbeOutcome, ProbeError> {
        let headers = browser_headers(&self.user_agents.pick());
        let start = Instant::now();
        let resp = self.transport.get(url, headers).await?;
        let response_time = start.elapsed().as_secs_f64();

        let status = resp.status();
        let url_str = url.to_string();
        if !is_interesting(status, resp.headers()) {
            return Ok(ProbeOutcome::NoFinding { url: url_str, status_code: status });
        }

        let final_url = resp.final_url().to_string();
        let server = resp
            .headers()
            .get(SERVER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = resp.body().await?;
        let text = String::from_utf8_lossy(&body);

        Ok(ProbeOutcome::Finding(Finding {
            redirect_url: (final_url != url_str).then_some(final_url),
            url: url_str,
            status_code: status,
            response_time,
            content_length: body.len(),
            server,
            title: extract_title(&text),
            admin_indicators: extract_indicators(&text),
        }))
    }
}
