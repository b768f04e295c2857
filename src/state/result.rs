// Test result structures

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse hardware area a test belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    Drm,
    Audio,
    Video,
    Other,
}

impl Subsystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drm => "DRM",
            Self::Audio => "AUDIO",
            Self::Video => "VIDEO",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
    Error,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
            Self::Error => "ERROR",
        }
    }

    /// CSS class used for HTML rows and summary cells
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Error => "error",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail | Self::Error)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded test result. Never mutated once appended to a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResultEntry {
    pub name: String,
    pub subsystem: Subsystem,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl TestResultEntry {
    /// Create an entry stamped with the current local time
    pub fn new(
        name: impl Into<String>,
        subsystem: Subsystem,
        status: TestStatus,
        duration_ms: u64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subsystem,
            status,
            duration_ms,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// `[SUBSYSTEM] name: RESULT (duration ms) - message`
    pub fn line(&self) -> String {
        format!(
            "[{}] {}: {} ({} ms) - {}",
            self.subsystem, self.name, self.status, self.duration_ms, self.message
        )
    }

    /// `[SUBSYSTEM] name: RESULT - message`, used by the summary view
    pub fn summary_line(&self) -> String {
        format!(
            "[{}] {}: {} - {}",
            self.subsystem, self.name, self.status, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_line() {
        let entry = TestResultEntry::new(
            "Buffer Sharing (ARGB)",
            Subsystem::Drm,
            TestStatus::Pass,
            12,
            "Test passed",
        );
        assert_eq!(
            entry.line(),
            "[DRM] Buffer Sharing (ARGB): PASS (12 ms) - Test passed"
        );
    }

    #[test]
    fn test_entry_summary_line_has_no_duration() {
        let entry =
            TestResultEntry::new("Audio Capture", Subsystem::Audio, TestStatus::Error, 7, "");
        assert_eq!(entry.summary_line(), "[AUDIO] Audio Capture: ERROR - ");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(TestStatus::Skip.to_string(), "SKIP");
        assert_eq!(TestStatus::Error.css_class(), "error");
        assert!(TestStatus::Fail.is_failure());
        assert!(!TestStatus::Skip.is_failure());
        assert_eq!(Subsystem::Other.to_string(), "OTHER");
    }
}
