use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::Cli;
use panel_hunter::http_client::create_scan_client;
use panel_hunter::output::{console, save_report, ScanReport};
use panel_hunter::probe::{ProbeEngine, RandomUserAgent, ReqwestTransport};
use panel_hunter::{wordlist, ScanAggregator, ScanConfig, Target};

pub enum RunOutcome {
    Completed,
    Interrupted,
}

/// Our crate follows the flags. hyper stays at ERROR: it warns once per request when
/// it strips hop-by-hop headers on HTTP/2 connections.
fn log_filter(debug: bool, verbose: bool) -> (String, &'static str) {
    let crate_level = if debug { "debug" } else if verbose { "info" } else { "warn" };
    let filter_str = format!(
        "panel_hunter={level},reqwest=info,hyper=error,h2=error,rustls=warn",
        level = crate_level
    );
    (filter_str, crate_level)
}

fn init_logging(cli: &Cli) {
    use tracing_subscriber::EnvFilter;
    let (filter_str, crate_level) = log_filter(cli.debug, cli.verbose);
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolves when the user hits Ctrl-C. If the handler cannot be installed, never resolves.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<RunOutcome> {
    init_logging(&cli);
    console::init_colors();

    // Configuration errors abort before any request goes out.
    let target = Target::parse(&cli.target)?;
    let config = ScanConfig::from_cli_values(cli.threads, cli.timeout, cli.delay, cli.no_redirects, cli.verify_ssl)?;
    let paths = wordlist::admin_paths();

    tracing::info!(url = %target, concurrency = config.concurrency, timeout = ?config.timeout, delay = ?config.delay,
        follow_redirects = config.follow_redirects, verify_tls = config.verify_tls, "Starting scan");
    console::print_banner(target.as_str(), &config, paths.len());

    let client = create_scan_client(&config)?;
    let transport = Arc::new(ReqwestTransport::new(client, config.timeout));
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let engine = ProbeEngine::new(transport, Arc::new(RandomUserAgent::new()), config).with_events(tx);

    let printer = console::spawn_live_printer(rx, console::progress_bar(paths.len(), cli.verbose), cli.verbose);
    let aggregator = ScanAggregator::new();

    let was_interrupted = tokio::select! {
        _ = engine.run(&target, &paths, &aggregator) => false,
        _ = interrupted() => true,
    };

    // Dropping the engine releases the client pool and closes the event channel.
    drop(engine);
    let _ = printer.await;

    if was_interrupted {
        tracing::debug!(completed = aggregator.total_requests(), "scan interrupted");
        return Ok(RunOutcome::Interrupted);
    }

    let summary = aggregator.summary(target.as_str(), paths.len());
    let findings = aggregator.into_findings();
    console::print_summary(&summary, &findings);

    if let Some(output) = cli.output {
        let path = PathBuf::from(output);
        if findings.is_empty() {
            console::print_nothing_to_save();
        } else {
            let report = ScanReport::new(&summary, findings);
            match save_report(&path, &report) {
                Ok(()) => console::print_saved(&path),
                // Console results already stand; a failed file write does not fail the run.
                Err(e) => console::print_save_error(&e),
            }
        }
    }

    Ok(RunOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter(false, false).0, "panel_hunter=warn,reqwest=info,hyper=error,h2=error,rustls=warn");
        assert_eq!(log_filter(false, true).1, "info");
        assert_eq!(log_filter(true, true).1, "debug");
    }

    #[test]
    fn test_log_filter_silences_hyper_warnings() {
        for (debug, verbose) in [(false, false), (false, true), (true, false)] {
            let (filter, _) = log_filter(debug, verbose);
            assert!(filter.contains("hyper=error"), "{filter}");
            assert!(tracing_subscriber::EnvFilter::try_new(&filter).is_ok());
        }
    }
}
