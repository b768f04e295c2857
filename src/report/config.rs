// Report configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::ReportError;

/// Default report file when none is configured
pub const DEFAULT_REPORT_FILE: &str = "test_report.txt";

/// Output format of the final report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Html,
    Xml,
    Csv,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 5] = [Self::Text, Self::Json, Self::Html, Self::Xml, Self::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Json => "JSON",
            Self::Html => "HTML",
            Self::Xml => "XML",
            Self::Csv => "CSV",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Level of a free-form log line.
///
/// Ordered Info < Warning < Error < Debug. A line is recorded when its level
/// compares greater than or equal to the configured minimum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    #[default]
    Info,
    Warning,
    Error,
    Debug,
}

impl ReportLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportLevel {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "debug" => Ok(Self::Debug),
            _ => Err(ReportError::UnknownLevel(s.to_string())),
        }
    }
}

/// Report configuration, fixed at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub format: ReportFormat,
    /// Only governs the initial open; `generate` always truncates
    pub append: bool,
    pub include_timestamp: bool,
    pub include_system_info: bool,
    pub include_performance_metrics: bool,
    pub min_level: ReportLevel,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_REPORT_FILE),
            format: ReportFormat::Text,
            append: false,
            include_timestamp: true,
            include_system_info: true,
            include_performance_metrics: true,
            min_level: ReportLevel::Info,
        }
    }
}

impl ReportConfig {
    /// Default configuration writing `format` to `output_path`
    pub fn new(output_path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            output_path: output_path.into(),
            format,
            ..Self::default()
        }
    }
}
