// Text renderer - plain text report

use super::{Renderer, Report, ReportError, ReportFormat, TIMESTAMP_FORMAT};

/// Plain text report
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }

    fn render(&self, report: &Report) -> Result<Vec<u8>, ReportError> {
        let config = report.config();
        let summary = report.summary();
        let mut out = String::new();

        out.push_str(&format!("===== {} =====\n", report.title()));
        out.push_str(&format!("{}\n", report.description()));
        if config.include_timestamp {
            out.push_str(&format!(
                "Start Time: {}\n",
                report.start_time().format(TIMESTAMP_FORMAT)
            ));
            out.push_str(&format!(
                "End Time: {}\n",
                report.finished_at().format(TIMESTAMP_FORMAT)
            ));
        }
        out.push('\n');

        if config.include_system_info
            && let Some(system) = report.system()
        {
            out.push_str("--- System ---\n");
            for (key, value) in system.fields() {
                out.push_str(&format!("{}: {}\n", key, value));
            }
            out.push('\n');
        }

        out.push_str("--- Summary ---\n");
        out.push_str(&format!("Total Tests: {}\n", summary.total));
        out.push_str(&format!("Passed Tests: {}\n", summary.passed));
        out.push_str(&format!("Failed Tests: {}\n", summary.failed));
        out.push_str(&format!("Skipped Tests: {}\n", summary.skipped));
        out.push_str(&format!("Error Tests: {}\n\n", summary.error));

        out.push_str("--- Test Results ---\n");
        for entry in report.results() {
            out.push_str(&entry.line());
            out.push('\n');
        }

        if report.renders_metrics() {
            out.push_str("\n--- Performance Metrics ---\n");
            for metric in report.metrics() {
                out.push_str(&metric.line());
                out.push('\n');
            }
        }

        Ok(out.into_bytes())
    }
}
