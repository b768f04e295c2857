// JSON renderer - structured equivalent of the text report

use serde::Serialize;

use super::{Renderer, Report, ReportError, ReportFormat, SystemInfo};
use crate::state::{MetricEntry, Summary, TestResultEntry};

/// JSON report
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a SystemInfo>,
    summary: Summary,
    results: Vec<JsonResult<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<Vec<JsonMetric<'a>>>,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    subsystem: &'static str,
    name: &'a str,
    result: &'static str,
    duration_ms: u64,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

#[derive(Serialize)]
struct JsonMetric<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    metric_type: &'static str,
    value: f64,
    units: &'a str,
}

impl<'a> JsonResult<'a> {
    fn new(entry: &'a TestResultEntry, include_timestamp: bool) -> Self {
        Self {
            subsystem: entry.subsystem.as_str(),
            name: &entry.name,
            result: entry.status.as_str(),
            duration_ms: entry.duration_ms,
            message: &entry.message,
            timestamp: include_timestamp.then(|| entry.timestamp.to_rfc3339()),
        }
    }
}

impl<'a> From<&'a MetricEntry> for JsonMetric<'a> {
    fn from(metric: &'a MetricEntry) -> Self {
        Self {
            name: &metric.name,
            metric_type: metric.metric_type.as_str(),
            value: metric.value,
            units: &metric.units,
        }
    }
}

impl Renderer for JsonRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(&self, report: &Report) -> Result<Vec<u8>, ReportError> {
        let config = report.config();

        let document = JsonReport {
            title: report.title(),
            description: report.description(),
            start_time: config
                .include_timestamp
                .then(|| report.start_time().to_rfc3339()),
            end_time: config
                .include_timestamp
                .then(|| report.finished_at().to_rfc3339()),
            system: report.system().filter(|_| config.include_system_info),
            summary: report.summary(),
            results: report
                .results()
                .iter()
                .map(|entry| JsonResult::new(entry, config.include_timestamp))
                .collect(),
            metrics: report
                .renders_metrics()
                .then(|| report.metrics().iter().map(JsonMetric::from).collect()),
        };

        let mut bytes = serde_json::to_vec_pretty(&document)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
