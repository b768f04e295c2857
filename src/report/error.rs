// Report errors

use std::path::PathBuf;
use thiserror::Error;

use super::ReportFormat;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to open report file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no renderer registered for {0} reports")]
    UnsupportedFormat(ReportFormat),

    #[error("unknown report format: {0}")]
    UnknownFormat(String),

    #[error("unknown report level: {0}")]
    UnknownLevel(String),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
}
