pub mod cli;
pub mod commands;
pub mod config;
pub mod execution;
pub mod logging;
pub mod probes;
pub mod report;
pub mod state;

pub use report::{Report, ReportConfig, ReportError, ReportFormat, ReportLevel};
pub use state::{MetricType, Subsystem, TestStatus};
