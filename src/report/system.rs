// Host information captured into reports

use serde::Serialize;
use std::path::Path;

/// Host the run executed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl SystemInfo {
    /// Collect information about the running host
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            kernel: read_proc_value(Path::new("/proc/sys/kernel/osrelease")),
            hostname: read_proc_value(Path::new("/proc/sys/kernel/hostname")),
        }
    }

    /// `key: value` pairs in display order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("OS", self.os.as_str()),
            ("Architecture", self.arch.as_str()),
        ];
        if let Some(kernel) = &self.kernel {
            fields.push(("Kernel", kernel.as_str()));
        }
        if let Some(hostname) = &self.hostname {
            fields.push(("Hostname", hostname.as_str()));
        }
        fields
    }
}

fn read_proc_value(path: &Path) -> Option<String> {
    let value = std::fs::read_to_string(path).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
