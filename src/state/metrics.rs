// Performance metric structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of performance metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    TimeMicroseconds,
    Throughput,
    LatencyMs,
    FrameRate,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimeMicroseconds => "TIME_US",
            Self::Throughput => "THROUGHPUT",
            Self::LatencyMs => "LATENCY_MS",
            Self::FrameRate => "FRAME_RATE",
        }
    }

    /// Units recorded when the caller does not supply any
    pub fn default_units(&self) -> &'static str {
        match self {
            Self::TimeMicroseconds => "µs",
            Self::Throughput => "B/s",
            Self::LatencyMs => "ms",
            Self::FrameRate => "fps",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded performance metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricEntry {
    pub name: String,
    pub metric_type: MetricType,
    pub value: f64,
    pub units: String,
}

impl MetricEntry {
    pub fn new(
        name: impl Into<String>,
        metric_type: MetricType,
        value: f64,
        units: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            metric_type,
            value,
            units: units.unwrap_or(metric_type.default_units()).to_string(),
        }
    }

    /// `name = value units`, value with two decimals
    pub fn line(&self) -> String {
        format!("{} = {:.2} {}", self.name, self.value, self.units)
    }
}
