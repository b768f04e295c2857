// Tests for report renderers - public API only

use std::path::Path;

use vendor_test_suite::report::{
    CsvRenderer, HtmlRenderer, JsonRenderer, Renderer, Report, ReportConfig, ReportFormat,
    TextRenderer, XmlRenderer,
};
use vendor_test_suite::state::{Subsystem, TestStatus};

fn sample_report(path: &Path, config: ReportConfig) -> Report {
    let mut report = Report::create(Some("Panel <QA>"), Some("Nightly & weekly"), Some(config))
        .expect("Failed to create report");
    report.add_test_result(
        "Primary Plane Configuration",
        Subsystem::Drm,
        TestStatus::Pass,
        4,
        Some("Test passed"),
    );
    report.add_test_result(
        "Audio Capture",
        Subsystem::Audio,
        TestStatus::Fail,
        11,
        Some("xrun <3>"),
    );
    report.add_test_result(
        "Video Encoding",
        Subsystem::Video,
        TestStatus::Skip,
        0,
        Some("not an encoder"),
    );
    report.add_test_result(
        "USB Bus",
        Subsystem::Other,
        TestStatus::Error,
        1,
        Some("permission denied"),
    );
    report.add_time_metric("Buffer Sharing", 123.0);
    report.add_throughput_metric("DMA copy", 2048.5);
    assert!(path.exists());
    report
}

fn render(renderer: &dyn Renderer, report: &Report) -> String {
    String::from_utf8(renderer.render(report).expect("render failed")).expect("not UTF-8")
}

#[test]
fn test_text_results_in_insertion_order() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.txt");
    let report = sample_report(&path, ReportConfig::new(&path, ReportFormat::Text));

    // Act
    let text = render(&TextRenderer, &report);

    // Assert
    let section = text
        .split("--- Test Results ---\n")
        .nth(1)
        .expect("missing results section");
    let lines: Vec<&str> = section.lines().take(4).collect();
    assert_eq!(
        lines,
        [
            "[DRM] Primary Plane Configuration: PASS (4 ms) - Test passed",
            "[AUDIO] Audio Capture: FAIL (11 ms) - xrun <3>",
            "[VIDEO] Video Encoding: SKIP (0 ms) - not an encoder",
            "[OTHER] USB Bus: ERROR (1 ms) - permission denied",
        ]
    );
    assert!(text.contains(
        "--- Performance Metrics ---\nBuffer Sharing = 123.00 µs\nDMA copy = 2048.50 B/s\n"
    ));
    assert!(text.contains("--- System ---\n"));
}

#[test]
fn test_text_without_metrics_or_system() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.txt");
    let config = ReportConfig {
        include_performance_metrics: false,
        include_system_info: false,
        include_timestamp: false,
        ..ReportConfig::new(&path, ReportFormat::Text)
    };
    let report = sample_report(&path, config);

    // Act
    let text = render(&TextRenderer, &report);

    // Assert
    assert!(!text.contains("Performance Metrics"));
    assert!(!text.contains("--- System ---"));
    assert!(!text.contains("Start Time:"));
}

#[test]
fn test_html_structure() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.html");
    let report = sample_report(&path, ReportConfig::new(&path, ReportFormat::Html));

    // Act
    let html = render(&HtmlRenderer, &report);

    // Assert
    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<title>Panel &lt;QA&gt;</title>"));
    assert!(html.contains("<p>Nightly &amp; weekly</p>"));
    assert!(html.contains("<p>Start Time: "));
    assert!(html.contains("<th>Timestamp</th>"));
    assert!(html.contains("tr.pass { background-color: #dff0d8; }"));
    assert!(html.contains("<td>xrun &lt;3&gt;</td>"));
    assert!(html.contains("<h2>Performance Metrics</h2>"));
    assert!(html.contains("<td>123.00</td>"));
    assert!(html.contains("<td>µs</td>"));
    assert!(html.contains("<td>TIME_US</td>"));
    assert!(html.trim_end().ends_with("</html>"));

    let classes: Vec<&str> = html
        .match_indices("<tr class=\"")
        .map(|(i, _)| {
            let rest = &html[i + "<tr class=\"".len()..];
            &rest[..rest.find('"').expect("unterminated class")]
        })
        .collect();
    assert_eq!(classes, ["pass", "fail", "skip", "error"]);
}

#[test]
fn test_html_without_timestamp_omits_column() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.html");
    let config = ReportConfig {
        include_timestamp: false,
        ..ReportConfig::new(&path, ReportFormat::Html)
    };
    let report = sample_report(&path, config);

    // Act
    let html = render(&HtmlRenderer, &report);

    // Assert
    assert!(!html.contains("Timestamp"));
    assert!(!html.contains("Start Time"));
    let table = html
        .split("<h2>Test Results</h2>")
        .nth(1)
        .and_then(|rest| rest.split("</table>").next())
        .expect("missing results table");
    assert_eq!(table.matches("<th>").count(), 5);
    assert_eq!(table.matches("<td>").count(), 4 * 5);
}

#[test]
fn test_html_metrics_disabled() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.html");
    let config = ReportConfig {
        include_performance_metrics: false,
        ..ReportConfig::new(&path, ReportFormat::Html)
    };
    let report = sample_report(&path, config);

    // Act
    let html = render(&HtmlRenderer, &report);

    // Assert
    assert!(!html.contains("Performance Metrics"));
}

#[test]
fn test_html_generate_writes_file() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.html");
    let mut report = sample_report(&path, ReportConfig::new(&path, ReportFormat::Html));

    // Act
    let result = report.generate();

    // Assert
    assert!(result.is_ok());
    let html = std::fs::read_to_string(&path).expect("Failed to read report");
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert!(html.contains("<p>4</p>"));
}

#[test]
fn test_json_fields() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.json");
    let report = sample_report(&path, ReportConfig::new(&path, ReportFormat::Json));

    // Act
    let json: serde_json::Value =
        serde_json::from_slice(&JsonRenderer.render(&report).expect("render failed"))
            .expect("Invalid JSON output");

    // Assert
    assert_eq!(json["title"], "Panel <QA>");
    assert_eq!(json["summary"]["total"], 4);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["error"], 1);
    assert_eq!(json["results"][1]["subsystem"], "AUDIO");
    assert_eq!(json["results"][1]["result"], "FAIL");
    assert_eq!(json["results"][1]["duration_ms"], 11);
    assert!(json["results"][0]["timestamp"].is_string());
    assert_eq!(json["metrics"][0]["units"], "µs");
    assert_eq!(json["metrics"][1]["type"], "THROUGHPUT");
    assert!(json["system"]["os"].is_string());
}

#[test]
fn test_json_without_timestamps() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.json");
    let config = ReportConfig {
        include_timestamp: false,
        include_performance_metrics: false,
        ..ReportConfig::new(&path, ReportFormat::Json)
    };
    let report = sample_report(&path, config);

    // Act
    let json: serde_json::Value =
        serde_json::from_slice(&JsonRenderer.render(&report).expect("render failed"))
            .expect("Invalid JSON output");

    // Assert
    assert!(json.get("start_time").is_none());
    assert!(json["results"][0].get("timestamp").is_none());
    assert!(json.get("metrics").is_none());
}

#[test]
fn test_xml_escaping_and_counts() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.xml");
    let report = sample_report(&path, ReportConfig::new(&path, ReportFormat::Xml));

    // Act
    let xml = render(&XmlRenderer, &report);

    // Assert
    assert!(xml.starts_with("<?xml version=\"1.0\""));
    assert!(xml.contains("title=\"Panel &lt;QA&gt;\""));
    assert!(xml.contains(
        "<summary total=\"4\" passed=\"1\" failed=\"1\" skipped=\"1\" error=\"1\" />"
    ));
    assert!(xml.contains(">xrun &lt;3&gt;</result>"));
    assert!(xml.contains(
        "<metric name=\"Buffer Sharing\" type=\"TIME_US\" value=\"123.00\" units=\"µs\" />"
    ));
    assert!(xml.trim_end().ends_with("</testReport>"));
}

#[test]
fn test_csv_rows() {
    // Arrange
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("report.csv");
    let config = ReportConfig {
        include_timestamp: false,
        ..ReportConfig::new(&path, ReportFormat::Csv)
    };
    let mut report = sample_report(&path, config);
    report.add_test_result(
        "Format, YUV",
        Subsystem::Video,
        TestStatus::Pass,
        2,
        Some("said \"ok\""),
    );

    // Act
    let csv = render(&CsvRenderer, &report);

    // Assert
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "subsystem,name,result,duration_ms,message");
    assert_eq!(
        lines[1],
        "DRM,Primary Plane Configuration,PASS,4,Test passed"
    );
    assert_eq!(lines[5], "VIDEO,\"Format, YUV\",PASS,2,\"said \"\"ok\"\"\"");
    assert_eq!(lines[6], "");
    assert_eq!(lines[7], "metric,type,value,units");
    assert_eq!(lines[8], "Buffer Sharing,TIME_US,123.00,µs");
}
