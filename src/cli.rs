use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version,
    about = "Admin panel discovery tool",
    long_about = None,
    after_help = "Examples:\n  panel_hunter example.com\n  panel_hunter https://target.com -t 50 -v\n  panel_hunter target.com -o results.json --timeout 15\n  panel_hunter https://site.com -o report.html --verify-ssl"
)]
pub struct Cli {
    /// Target URL (e.g. example.com or https://example.com)
    pub target: String,

    /// Number of concurrent probes
    #[arg(short = 't', long, default_value_t = 20_usize)]
    pub threads: usize,

    /// Request timeout in seconds
    #[arg(short = 'T', long, default_value_t = 10_u64)]
    pub timeout: u64,

    /// Delay after each request in seconds
    #[arg(short = 'd', long, default_value_t = 0.0)]
    pub delay: f64,

    /// Output file (.txt, .json, .csv, .html)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print timeouts, errors and each panel as it is found
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Do not follow HTTP redirects
    #[arg(long, default_value_t = false)]
    pub no_redirects: bool,

    /// Verify SSL certificates (default: disabled)
    #[arg(long, default_value_t = false)]
    pub verify_ssl: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
