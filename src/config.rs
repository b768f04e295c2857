// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report::{DEFAULT_REPORT_FILE, ReportConfig, ReportFormat, ReportLevel};

/// File names searched in the current and home directories
pub const CONFIG_FILE_NAMES: [&str; 2] = [".vendortestrc", ".vendortestrc.toml"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportSection,

    #[serde(default)]
    pub probe: ProbeSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    /// Report format (text, json, html, xml, csv)
    #[serde(default)]
    pub format: ReportFormat,

    /// Report file path
    #[serde(default = "default_report_file")]
    pub file: String,

    /// Append to an existing report file instead of truncating it
    #[serde(default)]
    pub append: bool,

    #[serde(default = "default_true")]
    pub include_timestamp: bool,

    #[serde(default = "default_true")]
    pub include_system_info: bool,

    #[serde(default = "default_true")]
    pub include_performance_metrics: bool,

    /// Minimum level for log lines (info, warning, error, debug)
    #[serde(default)]
    pub min_level: ReportLevel,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            file: default_report_file(),
            append: false,
            include_timestamp: true,
            include_system_info: true,
            include_performance_metrics: true,
            min_level: ReportLevel::default(),
        }
    }
}

impl ReportSection {
    pub fn to_report_config(&self) -> ReportConfig {
        ReportConfig {
            output_path: PathBuf::from(&self.file),
            format: self.format,
            append: self.append,
            include_timestamp: self.include_timestamp,
            include_system_info: self.include_system_info,
            include_performance_metrics: self.include_performance_metrics,
            min_level: self.min_level,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSection {
    /// Directory holding the device nodes
    #[serde(default = "default_device_root")]
    pub device_root: String,

    /// Number of times each probe repeats its check
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Audio sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            device_root: default_device_root(),
            iterations: default_iterations(),
            width: default_width(),
            height: default_height(),
            sample_rate: default_sample_rate(),
        }
    }
}

// Default values
pub fn default_report_file() -> String {
    String::from(DEFAULT_REPORT_FILE)
}

pub fn default_device_root() -> String {
    String::from("/dev")
}

fn default_true() -> bool {
    true
}

fn default_iterations() -> u32 {
    1
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_sample_rate() -> u32 {
    44100
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .vendortestrc (current directory)
        // 2. ~/.vendortestrc (home directory)
        // 3. .vendortestrc.toml (current directory)
        // 4. ~/.vendortestrc.toml (home directory)
        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir();

        for name in CONFIG_FILE_NAMES {
            let mut candidates = vec![cwd.join(name)];
            if let Some(home) = &home {
                candidates.push(home.join(name));
            }

            if let Some(path) = candidates.iter().find(|p| p.exists()) {
                tracing::debug!("Loading configuration from {}", path.display());
                return Self::load_from_file(path);
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let config = Self::parse(&content);
        if config.is_none() {
            tracing::warn!("Ignoring invalid configuration file {}", path.display());
        }
        config
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[report]
format = "html"
file = "out/report.html"
append = true
include_timestamp = false
min_level = "warning"

[probe]
device_root = "/tmp/dev"
iterations = 5
sample_rate = 48000
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert_eq!(config.report.format, ReportFormat::Html);
        assert_eq!(config.report.file, "out/report.html");
        assert!(config.report.append);
        assert!(!config.report.include_timestamp);
        assert!(config.report.include_system_info);
        assert_eq!(config.report.min_level, ReportLevel::Warning);
        assert_eq!(config.probe.device_root, "/tmp/dev");
        assert_eq!(config.probe.iterations, 5);
        assert_eq!(config.probe.sample_rate, 48000);
        assert_eq!(config.probe.width, 1280);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Config::parse("[report]\nformat = \"yaml\"\n").is_none());
    }

    #[test]
    fn test_to_toml_roundtrip_defaults() {
        let toml = Config::default().to_toml();
        let parsed = Config::parse(&toml).expect("Failed to parse generated config");
        assert_eq!(parsed.report.file, DEFAULT_REPORT_FILE);
        assert_eq!(parsed.probe.device_root, "/dev");
    }

    #[test]
    fn test_report_section_to_report_config() {
        let section = ReportSection::default();
        assert_eq!(section.to_report_config(), ReportConfig::default());
    }
}
