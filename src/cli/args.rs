// CLI argument definitions using Clap

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::probes::ProbeContext;
use crate::report::{ReportConfig, ReportFormat};
use crate::state::Subsystem;

/// Subsystems that can be selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsystemSelection {
    Drm,
    Audio,
    Video,
    Usb,
    All,
}

impl std::str::FromStr for SubsystemSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "drm" => Ok(Self::Drm),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            "usb" => Ok(Self::Usb),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown subsystem: {}", s)),
        }
    }
}

impl SubsystemSelection {
    /// Title of the report produced for this selection
    pub fn report_title(&self) -> &'static str {
        match self {
            Self::Drm => "DRM Test Report",
            Self::Audio => "Audio Test Report",
            Self::Video => "Video Test Report",
            Self::Usb => "USB Test Report",
            Self::All => "Vendor Test Suite Report",
        }
    }

    /// Subsystem tags run by this selection, in execution order
    pub fn subsystems(&self) -> Vec<Subsystem> {
        match self {
            Self::Drm => vec![Subsystem::Drm],
            Self::Audio => vec![Subsystem::Audio],
            Self::Video => vec![Subsystem::Video],
            Self::Usb => vec![Subsystem::Other],
            Self::All => vec![
                Subsystem::Drm,
                Subsystem::Audio,
                Subsystem::Video,
                Subsystem::Other,
            ],
        }
    }
}

/// Hardware conformance harness for vendor subsystems
#[derive(Parser, Debug)]
#[command(name = "vendor-test-suite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe vendor subsystems and write a test report", long_about = None)]
pub struct Cli {
    /// Subsystem to test (drm, audio, video, usb, all)
    #[arg(short = 's', long, default_value = "all", value_parser = ["drm", "audio", "video", "usb", "all"])]
    pub subsystem: String,

    /// Specific test to run
    #[arg(short = 't', long = "test", value_name = "TEST_NAME")]
    pub test_name: Option<String>,

    /// Device index to test
    #[arg(short = 'd', long = "device", default_value_t = 0)]
    pub device_index: u32,

    /// Width for video/DRM tests
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Height for video/DRM tests
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Sample rate for audio tests
    #[arg(short = 'r', long = "rate", value_name = "SAMPLE_RATE")]
    pub sample_rate: Option<u32>,

    /// Number of test iterations
    #[arg(short = 'i', long)]
    pub iterations: Option<u32>,

    /// Directory holding the device nodes
    #[arg(long, value_name = "PATH")]
    pub device_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Report format
    #[arg(long, value_name = "FORMAT", value_parser = ["text", "json", "html", "xml", "csv"])]
    pub report_format: Option<String>,

    /// Report file path
    #[arg(long, value_name = "FILE")]
    pub report_file: Option<PathBuf>,

    /// Append to existing report file
    #[arg(long, default_value_t = false)]
    pub report_append: bool,

    /// Disable report generation
    #[arg(long, default_value_t = false)]
    pub no_report: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Install shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

impl Cli {
    /// Selected subsystems
    pub fn selection(&self) -> SubsystemSelection {
        self.subsystem.parse().unwrap_or(SubsystemSelection::All)
    }

    /// Report configuration: command line over configuration file over defaults
    pub fn report_config(&self, config: &Config) -> Result<ReportConfig> {
        let mut report = config.report.to_report_config();

        if let Some(format) = &self.report_format {
            report.format = format
                .parse::<ReportFormat>()
                .with_context(|| format!("Invalid --report-format '{}'", format))?;
        }
        if let Some(file) = &self.report_file {
            report.output_path = file.clone();
        }
        report.append |= self.report_append;

        Ok(report)
    }

    /// Probe parameters: command line over configuration file over defaults
    pub fn probe_context(&self, config: &Config) -> ProbeContext {
        let probe = &config.probe;
        ProbeContext {
            device_root: self
                .device_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(&probe.device_root)),
            device_index: self.device_index,
            width: self.width.unwrap_or(probe.width),
            height: self.height.unwrap_or(probe.height),
            sample_rate: self.sample_rate.unwrap_or(probe.sample_rate),
            iterations: self.iterations.unwrap_or(probe.iterations).max(1),
        }
    }

    /// Report description for this run
    pub fn report_description(&self, iterations: u32) -> String {
        format!(
            "Test run on {} with {} iterations",
            self.test_name.as_deref().unwrap_or("all tests"),
            iterations
        )
    }
}
