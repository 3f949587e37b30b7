use reqwest::{redirect, Client, ClientBuilder};
use std::time::Duration;

use crate::config::ScanConfig;
use crate::error::ConfigError;

/// Build the scan-scoped HTTP client. Dropped when the scan ends.
pub fn create_scan_client(config: &ScanConfig) -> Result<Client, ConfigError> {
    let redirect_policy = if config.follow_redirects {
        redirect::Policy::limited(10)
    } else {
        redirect::Policy::none()
    };

    let client = ClientBuilder::new()
        // One idle connection per permit is enough to keep the pool warm
        .pool_max_idle_per_host(config.concurrency)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)

        .timeout(config.timeout)
        .connect_timeout(config.timeout)

        .gzip(true)
        .deflate(true)
        .brotli(true)

        .use_rustls_tls()
        .tls_sni(true)
        .https_only(false)

        .redirect(redirect_policy)

        // Recon default: accept self-signed and expired certificates unless asked not to
        .danger_accept_invalid_certs(!config.verify_tls)

        .build()?;

    Ok(client)
}
