// State module - Report entry storage
// Append-only log of test results and performance metrics for a single run

pub mod metrics;
pub mod result;

pub use metrics::{MetricEntry, MetricType};
pub use result::{Subsystem, TestResultEntry, TestStatus};

use serde::Serialize;

/// Running counters over every recorded test result.
///
/// `total == passed + failed + skipped + error` holds after every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub error: u32,
}

impl Summary {
    fn record(&mut self, status: TestStatus) {
        self.total += 1;
        match status {
            TestStatus::Pass => self.passed += 1,
            TestStatus::Fail => self.failed += 1,
            TestStatus::Skip => self.skipped += 1,
            TestStatus::Error => self.error += 1,
        }
    }

    /// Share of `count` in the total, in percent. Zero when nothing ran.
    pub fn percentage(&self, count: u32) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (f64::from(count) * 100.0) / f64::from(self.total)
        }
    }

    /// Number of results that failed or errored
    pub fn failures(&self) -> u32 {
        self.failed + self.error
    }
}

/// Test results storage
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestResults {
    summary: Summary,
    results: Vec<TestResultEntry>,
    metrics: Vec<MetricEntry>,
}

impl TestResults {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a test result and update the counters
    pub fn add(&mut self, entry: TestResultEntry) {
        self.summary.record(entry.status);
        self.results.push(entry);
    }

    /// Append a performance metric
    pub fn add_metric(&mut self, metric: MetricEntry) {
        self.metrics.push(metric);
    }

    /// Current counters
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// All results in insertion order
    pub fn all(&self) -> &[TestResultEntry] {
        &self.results
    }

    /// All metrics in insertion order
    pub fn metrics(&self) -> &[MetricEntry] {
        &self.metrics
    }

    /// Failed and errored results, in insertion order
    pub fn failures(&self) -> impl Iterator<Item = &TestResultEntry> {
        self.results
            .iter()
            .filter(|entry| entry.status.is_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, status: TestStatus) -> TestResultEntry {
        TestResultEntry::new(name, Subsystem::Drm, status, 1, "")
    }

    #[test]
    fn test_counters_stay_consistent() {
        let mut results = TestResults::new();
        let statuses = [
            TestStatus::Pass,
            TestStatus::Fail,
            TestStatus::Skip,
            TestStatus::Error,
            TestStatus::Pass,
            TestStatus::Error,
        ];

        for (i, status) in statuses.iter().enumerate() {
            results.add(entry(&format!("t{}", i), *status));
            let s = results.summary();
            assert_eq!(s.total, s.passed + s.failed + s.skipped + s.error);
            assert_eq!(s.total as usize, i + 1);
        }

        let s = results.summary();
        assert_eq!(s.passed, 2);
        assert_eq!(s.failed, 1);
        assert_eq!(s.skipped, 1);
        assert_eq!(s.error, 2);
        assert_eq!(s.failures(), 3);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut results = TestResults::new();
        results.add(entry("zeta", TestStatus::Pass));
        results.add(entry("alpha", TestStatus::Pass));
        results.add(entry("zeta", TestStatus::Fail));

        let names: Vec<&str> = results.all().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "zeta"]);
        assert_eq!(results.all()[2].status, TestStatus::Fail);
    }

    #[test]
    fn test_failures_only_fail_and_error() {
        let mut results = TestResults::new();
        results.add(entry("a", TestStatus::Pass));
        results.add(entry("b", TestStatus::Error));
        results.add(entry("c", TestStatus::Skip));
        results.add(entry("d", TestStatus::Fail));

        let names: Vec<&str> = results.failures().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "d"]);
    }

    #[test]
    fn test_percentage_of_empty_summary() {
        let summary = Summary::default();
        assert_eq!(summary.percentage(summary.passed), 0.0);
        assert_eq!(summary.percentage(summary.failed), 0.0);
    }
}
