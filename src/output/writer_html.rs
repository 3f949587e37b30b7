use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::output::report::ScanReport;

const STYLE: &str = "body{font-family:sans-serif;margin:2em;color:#222}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:6px 8px;text-align:left;vertical-align:top}\
th{background:#f0f0f0}\
.s2{color:#1a7f37}.s3{color:#0969da}.s4{color:#9a6700}";

/// Self-contained HTML page with one table row per finding.
pub fn render(report: &ScanReport) -> String {
    let info = &report.scan_info;
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>Admin Panel Discovery - {}</title>\n", encode_text(&info.target)));
    out.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    out.push_str("<h1>Admin Panel Discovery Report</h1>\n<ul>\n");
    out.push_str(&format!("<li>Target: {}</li>\n", encode_text(&info.target)));
    out.push_str(&format!("<li>Scan Date: {}</li>\n", encode_text(&report.scan_date())));
    out.push_str(&format!("<li>Paths Tested: {}</li>\n", info.total_paths));
    out.push_str(&format!("<li>Panels Found: {}</li>\n", report.results.len()));
    out.push_str(&format!("<li>Duration: {:.2}s</li>\n</ul>\n", info.scan_duration));

    out.push_str("<table>\n<tr><th>#</th><th>URL</th><th>Status</th><th>Time (s)</th><th>Size</th>\
<th>Server</th><th>Title</th><th>Indicators</th><th>Redirect</th></tr>\n");

    for (i, r) in report.results.iter().enumerate() {
        let class = match r.status_code / 100 {
            2 => "s2",
            3 => "s3",
            _ => "s4",
        };
        out.push_str(&format!(
            "<tr><td>{}</td><td><a href=\"{}\">{}</a></td><td class=\"{}\">{}</td><td>{:.2}</td><td>{}</td>\
<td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            i + 1,
            encode_double_quoted_attribute(&r.url),
            encode_text(&r.url),
            class,
            r.status_code,
            r.response_time,
            r.content_length,
            encode_text(r.server.as_deref().unwrap_or("")),
            encode_text(r.title.as_deref().unwrap_or("")),
            encode_text(&r.admin_indicators.join(", ")),
            encode_text(r.redirect_url.as_deref().unwrap_or("")),
        ));
    }

    out.push_str("</table>\n</body>\n</html>\n");
    out
}
