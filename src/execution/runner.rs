// Probe runner - sequential execution with console echo and report ingestion

use console::Style;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

use crate::probes::{Probe, ProbeContext};
use crate::report::Report;
use crate::state::TestStatus;

/// Counts of what a run executed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub executed: usize,
    pub filtered: usize,
}

/// Runs probes one at a time
pub struct ProbeRunner {
    ctx: ProbeContext,
    test_name: Option<String>,
}

impl ProbeRunner {
    /// `test_name` restricts the run to probes whose id matches it
    pub fn new(ctx: ProbeContext, test_name: Option<String>) -> Self {
        Self { ctx, test_name }
    }

    fn selected(&self, probe: &dyn Probe) -> bool {
        match self.test_name.as_deref() {
            None | Some("all") => true,
            Some(name) => probe.id() == name,
        }
    }

    /// Run `probes`, echo each result to `output` and record it in `report` if present
    ///
    /// # Errors
    ///
    /// Returns an error only when writing to `output` fails.
    pub fn run<W: Write>(
        &self,
        probes: &[Box<dyn Probe>],
        mut report: Option<&mut Report>,
        output: &mut W,
    ) -> io::Result<RunStats> {
        let mut stats = RunStats::default();

        for probe in probes {
            if !self.selected(probe.as_ref()) {
                stats.filtered += 1;
                continue;
            }

            let start = Instant::now();
            let outcome = probe.run(&self.ctx);
            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            stats.executed += 1;

            debug!(
                "{} finished in {}ms: {}",
                probe.name(),
                duration_ms,
                outcome.message
            );
            let status = styled_status(outcome.status);
            writeln!(output, "{}: {}", probe.name(), status)?;

            if let Some(report) = report.as_deref_mut() {
                report.add_test_result(
                    probe.name(),
                    probe.subsystem(),
                    outcome.status,
                    duration_ms,
                    Some(&outcome.message),
                );
                for metric in &outcome.metrics {
                    report.add_metric(&metric.name, metric.metric_type, metric.value, None);
                }
            }

            for metric in &outcome.metrics {
                writeln!(
                    output,
                    "{} Performance: {:.2} {}",
                    metric.name,
                    metric.value,
                    metric.metric_type.default_units()
                )?;
            }
        }

        Ok(stats)
    }
}

fn styled_status(status: TestStatus) -> String {
    let style = match status {
        TestStatus::Pass => Style::new().green(),
        TestStatus::Fail | TestStatus::Error => Style::new().red(),
        TestStatus::Skip => Style::new().yellow(),
    };
    style.apply_to(status.as_str()).to_string()
}
