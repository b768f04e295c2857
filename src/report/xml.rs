// XML renderer - structured equivalent of the text report

use super::{Renderer, Report, ReportError, ReportFormat};

/// XML report
pub struct XmlRenderer;

impl Renderer for XmlRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Xml
    }

    fn render(&self, report: &Report) -> Result<Vec<u8>, ReportError> {
        let config = report.config();
        let summary = report.summary();

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let mut root = format!(
            "<testReport title=\"{}\" description=\"{}\"",
            escape_xml(report.title()),
            escape_xml(report.description())
        );
        if config.include_timestamp {
            root.push_str(&format!(
                " startTime=\"{}\" endTime=\"{}\"",
                report.start_time().to_rfc3339(),
                report.finished_at().to_rfc3339()
            ));
        }
        xml.push_str(&root);
        xml.push_str(">\n");

        if config.include_system_info
            && let Some(system) = report.system()
        {
            xml.push_str(&format!(
                "  <system os=\"{}\" arch=\"{}\"",
                escape_xml(&system.os),
                escape_xml(&system.arch)
            ));
            if let Some(kernel) = &system.kernel {
                xml.push_str(&format!(" kernel=\"{}\"", escape_xml(kernel)));
            }
            if let Some(hostname) = &system.hostname {
                xml.push_str(&format!(" hostname=\"{}\"", escape_xml(hostname)));
            }
            xml.push_str(" />\n");
        }

        xml.push_str(&format!(
            "  <summary total=\"{}\" passed=\"{}\" failed=\"{}\" skipped=\"{}\" error=\"{}\" />\n",
            summary.total, summary.passed, summary.failed, summary.skipped, summary.error
        ));

        xml.push_str("  <results>\n");
        for entry in report.results() {
            xml.push_str(&format!(
                "    <result subsystem=\"{}\" name=\"{}\" result=\"{}\" durationMs=\"{}\"",
                entry.subsystem,
                escape_xml(&entry.name),
                entry.status,
                entry.duration_ms
            ));
            if config.include_timestamp {
                xml.push_str(&format!(" timestamp=\"{}\"", entry.timestamp.to_rfc3339()));
            }
            xml.push_str(&format!(">{}</result>\n", escape_xml(&entry.message)));
        }
        xml.push_str("  </results>\n");

        if report.renders_metrics() {
            xml.push_str("  <metrics>\n");
            for metric in report.metrics() {
                xml.push_str(&format!(
                    "    <metric name=\"{}\" type=\"{}\" value=\"{:.2}\" units=\"{}\" />\n",
                    escape_xml(&metric.name),
                    metric.metric_type,
                    metric.value,
                    escape_xml(&metric.units)
                ));
            }
            xml.push_str("  </metrics>\n");
        }

        xml.push_str("</testReport>\n");

        Ok(xml.into_bytes())
    }
}

/// Escape text for use in XML attributes and content
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("Error with <special> & \"chars\" 'q'"),
            "Error with &lt;special&gt; &amp; &quot;chars&quot; &apos;q&apos;"
        );
    }
}
