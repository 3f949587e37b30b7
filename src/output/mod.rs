pub mod console;
pub mod report;
pub mod writer_csv;
pub mod writer_html;
pub mod writer_json;
pub mod writer_txt;

pub use report::{save_report, OutputFormat, ScanInfo, ScanReport};
