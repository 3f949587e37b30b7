use csv::Writer;

use crate::output::report::ScanReport;

pub const HEADER: [&str; 8] = [
    "URL",
    "Status Code",
    "Response Time (s)",
    "Redirect URL",
    "Content Length",
    "Server",
    "Title",
    "Admin Indicators",
];

pub fn render(report: &ScanReport) -> anyhow::Result<String> {
    let mut w = Writer::from_writer(Vec::new());
    w.write_record(HEADER)?;
    for it in &report.results {
        w.write_record(&[
            it.url.clone(),
            it.status_code.to_string(),
            format!("{:.2}", it.response_time),
            it.redirect_url.clone().unwrap_or_default(),
            it.content_length.to_string(),
            it.server.clone().unwrap_or_default(),
            it.title.clone().unwrap_or_default(),
            it.admin_indicators.join(", "),
        ])?;
    }
    let bytes = w.into_inner().map_err(|e| anyhow::anyhow!("csv flush failed: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}
