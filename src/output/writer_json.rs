use crate::output::report::ScanReport;

pub fn render(report: &ScanReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn parse(data: &str) -> anyhow::Result<ScanReport> {
    Ok(serde_json::from_str(data)?)
}
