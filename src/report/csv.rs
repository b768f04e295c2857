// CSV renderer - one row per test result, metrics in a trailing section

use csv::{Writer, WriterBuilder};

use super::{Renderer, Report, ReportError, ReportFormat, TIMESTAMP_FORMAT};

/// CSV report
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }

    fn render(&self, report: &Report) -> Result<Vec<u8>, ReportError> {
        let include_timestamp = report.config().include_timestamp;

        let mut wtr = csv_writer(Vec::new());
        let mut header = vec!["subsystem", "name", "result", "duration_ms", "message"];
        if include_timestamp {
            header.push("timestamp");
        }
        wtr.write_record(&header)?;

        for entry in report.results() {
            let mut row = vec![
                entry.subsystem.to_string(),
                entry.name.clone(),
                entry.status.to_string(),
                entry.duration_ms.to_string(),
                entry.message.clone(),
            ];
            if include_timestamp {
                row.push(entry.timestamp.format(TIMESTAMP_FORMAT).to_string());
            }
            wtr.write_record(&row)?;
        }

        let mut out = into_bytes(wtr)?;
        if !report.renders_metrics() {
            return Ok(out);
        }

        // Blank separator line, then the metrics table
        out.push(b'\n');
        let mut wtr = csv_writer(out);
        wtr.write_record(["metric", "type", "value", "units"])?;
        for metric in report.metrics() {
            wtr.write_record([
                metric.name.as_str(),
                metric.metric_type.as_str(),
                format!("{:.2}", metric.value).as_str(),
                metric.units.as_str(),
            ])?;
        }

        into_bytes(wtr)
    }
}

fn csv_writer(buf: Vec<u8>) -> Writer<Vec<u8>> {
    WriterBuilder::new().has_headers(false).from_writer(buf)
}

fn into_bytes(wtr: Writer<Vec<u8>>) -> Result<Vec<u8>, ReportError> {
    wtr.into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))
}
