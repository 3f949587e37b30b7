use std::io::IsTerminal;

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;

use crate::aggregate::ScanSummary;
use crate::config::ScanConfig;
use crate::finding::{Finding, ProbeOutcome};

/// Turn colors off for the rest of the process when stdout is not a terminal.
/// Call once at startup; nothing outside this module looks at it.
pub fn init_colors() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

fn status_colored(status: u16) -> ColoredString {
    if status == 200 {
        status.to_string().green()
    } else {
        status.to_string().yellow()
    }
}

pub fn print_banner(target: &str, config: &ScanConfig, total_paths: usize) {
    let bar = "═".repeat(62);
    println!();
    println!("{}", format!("╔{}╗", bar).cyan());
    println!("{}{}{}", "║              ".cyan(), "ADMIN PANEL DISCOVERY TOOL".bold(), "                      ║".cyan());
    println!("{}", format!("╚{}╝", bar).cyan());
    println!();
    println!("{}     {}", "Target:".blue(), target.bold());
    println!("{}    {}", "Threads:".blue(), config.concurrency.to_string().bold());
    println!("{}    {}", "Timeout:".blue(), format!("{}s", config.timeout.as_secs()).bold());
    println!("{}      {}", "Paths:".blue(), total_paths.to_string().bold());
    println!("{} {}", "SSL Verify:".blue(), (if config.verify_tls { "Yes" } else { "No" }).bold());
    println!();
    println!("{}", "=".repeat(64).yellow());
    println!("{} Starting scan with {} concurrent threads...", "[INFO]".blue(), config.concurrency);
    println!("{} Scanning {} potential admin paths...\n", "[INFO]".blue(), total_paths);
}

/// The block printed as soon as a panel is found (verbose mode).
pub fn format_live_finding(f: &Finding) -> String {
    let mut out = format!("{} {}\n", "[FOUND]".green(), f.url);
    out.push_str(&format!(
        "  └─ Status: {} | Time: {:.2}s | Size: {} bytes",
        status_colored(f.status_code),
        f.response_time,
        f.content_length
    ));
    if let Some(title) = &f.title {
        out.push_str(&format!("\n  └─ Title: {}", title.cyan()));
    }
    if let Some(redirect) = &f.redirect_url {
        out.push_str(&format!("\n  └─ Redirect: {}", redirect.blue()));
    }
    out
}

/// Progress bar over all paths; hidden in verbose mode or off a terminal.
pub fn progress_bar(total: usize, verbose: bool) -> ProgressBar {
    if verbose || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}") {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// Consume probe outcomes as they complete: tick the bar and, when verbose, print hits.
pub fn spawn_live_printer(
    mut rx: mpsc::UnboundedReceiver<ProbeOutcome>,
    pb: ProgressBar,
    verbose: bool,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut found = 0usize;
        while let Some(outcome) = rx.recv().await {
            pb.inc(1);
            if let ProbeOutcome::Finding(f) = &outcome {
                found += 1;
                pb.set_message(format!("{} found", found));
                // bar is hidden in verbose mode, so print directly
                if verbose {
                    println!("{}", format_live_finding(f));
                }
            }
        }
        pb.finish_and_clear();
    })
}

fn truncate_title(title: &str) -> String {
    const MAX: usize = 60;
    if title.chars().count() > MAX {
        format!("{}...", title.chars().take(MAX).collect::<String>())
    } else {
        title.to_string()
    }
}

/// Thousands separators, e.g. `12345` -> `12,345`.
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn print_summary(summary: &ScanSummary, findings: &[Finding]) {
    let rule = "=".repeat(64);
    println!("\n{}", rule.cyan());
    println!("{}", "SCAN SUMMARY".bold());
    println!("{}", rule.cyan());

    println!("{}        {}", "Target URL:".blue(), summary.target);
    println!("{}    {}", "Total Requests:".blue(), summary.total_requests);
    println!("{} {}", "Admin Panels Found:".blue(), summary.found.to_string().green());
    println!("{}      {:.1}%", "Success Rate:".blue(), summary.success_rate());
    println!("{}      {:.2} seconds", "Elapsed Time:".blue(), summary.elapsed.as_secs_f64());
    println!("{}      {:.1} req/sec", "Request Rate:".blue(), summary.request_rate());

    if findings.is_empty() {
        println!("\n{}", "[NO ADMIN PANELS FOUND]".yellow());
        println!("Consider trying:");
        println!("• Different wordlists or custom paths");
        println!("• Subdomain enumeration");
        println!("• Directory bruteforcing");
        println!("• Port scanning for alternative services");
        return;
    }

    println!("\n{}", "[DISCOVERED ADMIN PANELS]".green());
    println!("{}", "─".repeat(50).green());

    for (i, f) in findings.iter().enumerate() {
        println!("{} {}", format!("{:2}.", i + 1).bold(), f.url);
        println!(
            "     Status: {} | Time: {:.2}s | Size: {} bytes",
            status_colored(f.status_code),
            f.response_time,
            group_digits(f.content_length)
        );
        if let Some(title) = &f.title {
            println!("     Title: {}", truncate_title(title).cyan());
        }
        if let Some(server) = &f.server {
            println!("     Server: {}", server.blue());
        }
        if !f.admin_indicators.is_empty() {
            let shown: Vec<&str> = f.admin_indicators.iter().take(5).map(|s| s.as_str()).collect();
            println!("     Indicators: {}", shown.join(", ").yellow());
        }
        if let Some(redirect) = &f.redirect_url {
            println!("     Redirect: {}", redirect.blue());
        }
        println!();
    }
}

pub fn print_saved(path: &std::path::Path) {
    println!("{} Results saved to {}", "[SUCCESS]".green(), path.display().to_string().bold());
}

pub fn print_nothing_to_save() {
    println!("{} No results to save", "[WARNING]".yellow());
}

pub fn print_save_error(err: &anyhow::Error) {
    eprintln!("{} Failed to save results: {:#}", "[ERROR]".red(), err);
}

pub fn print_interrupted() {
    eprintln!("\n{} Scan cancelled by user", "[INTERRUPTED]".yellow());
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "[ERROR]".red(), err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1234567), "1,234,567");
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("short"), "short");
        let long = "x".repeat(70);
        let t = truncate_title(&long);
        assert_eq!(t.len(), 63);
        assert!(t.ends_with("..."));
    }

    #[test]
    fn test_live_finding_block() {
        colored::control::set_override(false);
        let f = Finding {
            url: "https://example.com/admin".into(),
            status_code: 302,
            response_time: 0.256,
            redirect_url: Some("https://example.com/login".into()),
            content_length: 42,
            server: None,
            title: Some("Sign in".into()),
            admin_indicators: vec![],
        };
        let block = format_live_finding(&f);
        assert!(block.starts_with("[FOUND] https://example.com/admin"));
        assert!(block.contains("Status: 302 | Time: 0.26s | Size: 42 bytes"));
        assert!(block.contains("Title: Sign in"));
        assert!(block.contains("Redirect: https://example.com/login"));
    }
}
