// HTML renderer - self-contained HTML document

use super::{Renderer, Report, ReportError, ReportFormat, TIMESTAMP_FORMAT};

const STYLESHEET: &str = "    body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }
    .header { background-color: #f4f4f4; padding: 20px; border-radius: 5px; }
    .summary { display: flex; margin: 20px 0; }
    .summary-item { padding: 10px; margin-right: 10px; border-radius: 5px; flex: 1; }
    .pass { background-color: #dff0d8; }
    .fail { background-color: #f2dede; }
    .skip { background-color: #fcf8e3; }
    .error { background-color: #f2dede; }
    table { width: 100%; border-collapse: collapse; }
    th, td { padding: 10px; text-align: left; border-bottom: 1px solid #ddd; }
    th { background-color: #f4f4f4; }
    tr.pass { background-color: #dff0d8; }
    tr.fail { background-color: #f2dede; }
    tr.skip { background-color: #fcf8e3; }
    tr.error { background-color: #f2dede; }
";

/// HTML report
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(&self, report: &Report) -> Result<Vec<u8>, ReportError> {
        let config = report.config();
        let summary = report.summary();
        let title = escape_html(report.title());
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", title));
        html.push_str("  <style>\n");
        html.push_str(STYLESHEET);
        html.push_str("  </style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");

        html.push_str("  <div class=\"header\">\n");
        html.push_str(&format!("    <h1>{}</h1>\n", title));
        html.push_str(&format!(
            "    <p>{}</p>\n",
            escape_html(report.description())
        ));
        if config.include_timestamp {
            html.push_str(&format!(
                "    <p>Start Time: {}</p>\n",
                report.start_time().format(TIMESTAMP_FORMAT)
            ));
            html.push_str(&format!(
                "    <p>End Time: {}</p>\n",
                report.finished_at().format(TIMESTAMP_FORMAT)
            ));
        }
        if config.include_system_info
            && let Some(system) = report.system()
        {
            for (key, value) in system.fields() {
                html.push_str(&format!("    <p>{}: {}</p>\n", key, escape_html(value)));
            }
        }
        html.push_str("  </div>\n");

        html.push_str("  <div class=\"summary\">\n");
        for (class, label, count) in [
            ("summary-item pass", "Passed", summary.passed),
            ("summary-item fail", "Failed", summary.failed),
            ("summary-item skip", "Skipped", summary.skipped),
            ("summary-item error", "Errors", summary.error),
            ("summary-item", "Total", summary.total),
        ] {
            html.push_str(&format!("    <div class=\"{}\">\n", class));
            html.push_str(&format!("      <h2>{}</h2>\n", label));
            html.push_str(&format!("      <p>{}</p>\n", count));
            html.push_str("    </div>\n");
        }
        html.push_str("  </div>\n");

        html.push_str("  <h2>Test Results</h2>\n");
        html.push_str("  <table>\n");
        html.push_str("    <tr>\n");
        for header in [
            "Subsystem",
            "Test Name",
            "Result",
            "Duration (ms)",
            "Message",
        ] {
            html.push_str(&format!("      <th>{}</th>\n", header));
        }
        if config.include_timestamp {
            html.push_str("      <th>Timestamp</th>\n");
        }
        html.push_str("    </tr>\n");

        for entry in report.results() {
            html.push_str(&format!(
                "    <tr class=\"{}\">\n",
                entry.status.css_class()
            ));
            html.push_str(&format!("      <td>{}</td>\n", entry.subsystem));
            html.push_str(&format!("      <td>{}</td>\n", escape_html(&entry.name)));
            html.push_str(&format!("      <td>{}</td>\n", entry.status));
            html.push_str(&format!("      <td>{}</td>\n", entry.duration_ms));
            html.push_str(&format!("      <td>{}</td>\n", escape_html(&entry.message)));
            if config.include_timestamp {
                html.push_str(&format!(
                    "      <td>{}</td>\n",
                    entry.timestamp.format(TIMESTAMP_FORMAT)
                ));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </table>\n");

        if report.renders_metrics() {
            html.push_str("  <h2>Performance Metrics</h2>\n");
            html.push_str("  <table>\n");
            html.push_str("    <tr>\n");
            for header in ["Metric", "Type", "Value", "Units"] {
                html.push_str(&format!("      <th>{}</th>\n", header));
            }
            html.push_str("    </tr>\n");
            for metric in report.metrics() {
                html.push_str("    <tr>\n");
                html.push_str(&format!("      <td>{}</td>\n", escape_html(&metric.name)));
                html.push_str(&format!("      <td>{}</td>\n", metric.metric_type));
                html.push_str(&format!("      <td>{:.2}</td>\n", metric.value));
                html.push_str(&format!("      <td>{}</td>\n", escape_html(&metric.units)));
                html.push_str("    </tr>\n");
            }
            html.push_str("  </table>\n");
        }

        html.push_str("  <div class=\"footer\">\n");
        html.push_str("    <p>Generated by Vendor Test Suite</p>\n");
        html.push_str("  </div>\n");
        html.push_str("</body>\n");
        html.push_str("</html>\n");

        Ok(html.into_bytes())
    }
}

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
