use crate::output::report::ScanReport;

pub fn render(report: &ScanReport) -> String {
    let mut out = String::new();

    out.push_str("Admin Panel Discovery Report\n");
    out.push_str(&format!("Target: {}\n", report.scan_info.target));
    out.push_str(&format!("Scan Date: {}\n", report.scan_date()));
    out.push_str(&format!("Panels Found: {}\n", report.results.len()));
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");

    for (i, r) in report.results.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, r.url));
        out.push_str(&format!("   Status: {}\n", r.status_code));
        out.push_str(&format!("   Response Time: {:.2}s\n", r.response_time));
        if let Some(title) = &r.title {
            out.push_str(&format!("   Title: {}\n", title));
        }
        if let Some(server) = &r.server {
            out.push_str(&format!("   Server: {}\n", server));
        }
        if let Some(redirect) = &r.redirect_url {
            out.push_str(&format!("   Redirect: {}\n", redirect));
        }
        out.push('\n');
    }

    out
}
