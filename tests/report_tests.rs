use std::time::Duration;

use chrono::{Local, TimeZone};
use panel_hunter::output::{save_report, writer_csv, writer_html, writer_json, writer_txt, ScanReport};
use panel_hunter::{Finding, ScanSummary};

fn sample_findings() -> Vec<Finding> {
    vec![
        Finding {
            url: "https://example.com/admin".into(),
            status_code: 200,
            response_time: 0.123456,
            redirect_url: None,
            content_length: 2048,
            server: Some("nginx".into()),
            title: Some("Admin <Login>".into()),
            admin_indicators: vec!["login".into(), "admin".into(), "dashboard".into()],
        },
        Finding {
            url: "https://example.com/wp-admin".into(),
            status_code: 302,
            response_time: 1.5,
            redirect_url: Some("https://example.com/wp-login.php".into()),
            content_length: 0,
            server: None,
            title: None,
            admin_indicators: vec![],
        },
    ]
}

fn sample_report() -> ScanReport {
    let summary = ScanSummary {
        target: "https://example.com".into(),
        total_paths: 102,
        total_requests: 102,
        found: 2,
        elapsed: Duration::from_millis(4250),
    };
    let when = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    ScanReport::at(&summary, sample_findings(), when)
}

#[test]
fn json_round_trip_keeps_fields() {
    let report = sample_report();
    let json = writer_json::render(&report).unwrap();
    let back = writer_json::parse(&json).unwrap();

    assert_eq!(back.scan_info.target, "https://example.com");
    assert_eq!(back.scan_info.total_paths, 102);
    assert_eq!(back.scan_info.found_panels, 2);
    assert!((back.scan_info.scan_duration - 4.25).abs() < 1e-9);
    assert_eq!(back.results, report.results);
}

#[test]
fn json_uses_expected_field_names() {
    let json = writer_json::render(&sample_report()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in ["target", "timestamp", "total_paths", "found_panels", "scan_duration"] {
        assert!(v["scan_info"].get(key).is_some(), "scan_info.{key} missing");
    }
    let first = &v["results"][0];
    for key in [
        "url", "status_code", "response_time", "redirect_url", "content_length", "server", "title", "admin_indicators",
    ] {
        assert!(first.get(key).is_some(), "results[].{key} missing");
    }
    assert!(v["results"][1]["redirect_url"].is_string());
    assert!(first["redirect_url"].is_null());
}

#[test]
fn csv_has_header_and_formatted_rows() {
    let csv = writer_csv::render(&sample_report()).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    let header: Vec<String> = reader.headers().unwrap().iter().map(|s| s.to_string()).collect();
    assert_eq!(header, writer_csv::HEADER);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "https://example.com/admin");
    assert_eq!(&rows[0][2], "0.12");
    assert_eq!(&rows[0][3], "");
    assert_eq!(&rows[0][7], "login, admin, dashboard");
    assert_eq!(&rows[1][1], "302");
    assert_eq!(&rows[1][2], "1.50");
    assert_eq!(&rows[1][3], "https://example.com/wp-login.php");
}

#[test]
fn text_report_lists_each_finding() {
    let txt = writer_txt::render(&sample_report());
    assert!(txt.starts_with("Admin Panel Discovery Report\n"));
    assert!(txt.contains("Target: https://example.com\n"));
    assert!(txt.contains("Scan Date: 2024-03-09 14:05:07\n"));
    assert!(txt.contains("Panels Found: 2\n"));
    assert!(txt.contains("1. https://example.com/admin\n   Status: 200\n   Response Time: 0.12s\n   Title: Admin <Login>\n   Server: nginx\n"));
    assert!(txt.contains("2. https://example.com/wp-admin\n"));
    assert!(txt.contains("   Redirect: https://example.com/wp-login.php\n"));
}

#[test]
fn html_report_escapes_page_content() {
    let html = writer_html::render(&sample_report());
    assert!(html.contains("Admin &lt;Login&gt;"));
    assert!(!html.contains("Admin <Login>"));
    assert!(html.contains("https://example.com/wp-login.php"));
    assert_eq!(html.matches("<tr><td>").count(), 2);
}

#[test]
fn save_report_dispatches_on_extension() {
    let dir = std::env::temp_dir().join(format!("panel_hunter_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let report = sample_report();

    let json_path = dir.join("out.json");
    save_report(&json_path, &report).unwrap();
    let parsed = writer_json::parse(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.results.len(), 2);

    let csv_path = dir.join("out.csv");
    save_report(&csv_path, &report).unwrap();
    assert!(std::fs::read_to_string(&csv_path).unwrap().starts_with("URL,Status Code,"));

    let txt_path = dir.join("out.log");
    save_report(&txt_path, &report).unwrap();
    assert!(std::fs::read_to_string(&txt_path).unwrap().starts_with("Admin Panel Discovery Report"));

    // no temp files left behind
    let leftovers = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
        .count();
    assert_eq!(leftovers, 0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn save_report_into_missing_directory_fails() {
    let path = std::env::temp_dir().join("panel_hunter_missing_dir_xyz").join("nested").join("out.json");
    assert!(save_report(&path, &sample_report()).is_err());
    assert!(!path.exists());
}
