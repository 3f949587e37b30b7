pub mod aggregate;
pub mod config;
pub mod error;
pub mod finding;
pub mod http_client;
pub mod output;
pub mod probe;
pub mod target;
pub mod wordlist;

// re-export the types most callers need
pub use crate::aggregate::{ScanAggregator, ScanSummary};
pub use crate::config::ScanConfig;
pub use crate::finding::{Finding, ProbeOutcome};
pub use crate::target::Target;
