// Execution module - runs probes and feeds the report

pub mod runner;

pub use runner::{ProbeRunner, RunStats};
