use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::aggregate::ScanSummary;
use crate::finding::Finding;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanInfo {
    pub target: String,
    /// ISO-8601 local time the report was built.
    pub timestamp: String,
    pub total_paths: usize,
    pub found_panels: usize,
    /// Seconds.
    pub scan_duration: f64,
}

/// Everything the file writers need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_info: ScanInfo,
    pub results: Vec<Finding>,
}

impl ScanReport {
    pub fn new(summary: &ScanSummary, results: Vec<Finding>) -> Self {
        Self::at(summary, results, Local::now())
    }

    pub fn at(summary: &ScanSummary, results: Vec<Finding>, when: DateTime<Local>) -> Self {
        Self {
            scan_info: ScanInfo {
                target: summary.target.clone(),
                timestamp: when.to_rfc3339(),
                total_paths: summary.total_paths,
                found_panels: results.len(),
                scan_duration: summary.elapsed.as_secs_f64(),
            },
            results,
        }
    }

    /// `YYYY-MM-DD HH:MM:SS` form of the timestamp, for human-readable reports.
    pub fn scan_date(&self) -> String {
        DateTime::parse_from_rfc3339(&self.scan_info.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| self.scan_info.timestamp.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Html,
    Text,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "html" | "htm" => OutputFormat::Html,
            _ => OutputFormat::Text,
        }
    }
}

/// Render `report` into `path`, picking the format from the extension.
///
/// The bytes go to a sibling temp file first and are renamed into place, so the
/// target is either the old file or the complete new one.
pub fn save_report(path: &Path, report: &ScanReport) -> anyhow::Result<()> {
    let rendered = match OutputFormat::from_path(path) {
        OutputFormat::Json => super::writer_json::render(report)?,
        OutputFormat::Csv => super::writer_csv::render(report)?,
        OutputFormat::Html => super::writer_html::render(report),
        OutputFormat::Text => super::writer_txt::render(report),
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("output path has no file name: {}", path.display()))?;
    let tmp = path.with_file_name(format!(".{}.partial", file_name));

    std::fs::write(&tmp, rendered).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to move report into {}", path.display()));
    }
    tracing::debug!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dispatch() {
        assert_eq!(OutputFormat::from_path(Path::new("out.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("out.CSV")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("report.html")), OutputFormat::Html);
        assert_eq!(OutputFormat::from_path(Path::new("report.txt")), OutputFormat::Text);
        assert_eq!(OutputFormat::from_path(Path::new("report")), OutputFormat::Text);
    }
}
