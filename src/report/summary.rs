// Summary view - counts, percentages and the failed test listing

use std::io::{self, Write};

use super::Report;

/// Write the summary of `report` to `output`
pub fn write_summary<W: Write>(report: &Report, output: &mut W) -> io::Result<()> {
    let summary = report.summary();

    writeln!(output, "===== Test Summary =====")?;
    writeln!(output, "Total Tests: {}", summary.total)?;
    writeln!(
        output,
        "Passed Tests: {} ({:.1}%)",
        summary.passed,
        summary.percentage(summary.passed)
    )?;
    writeln!(
        output,
        "Failed Tests: {} ({:.1}%)",
        summary.failed,
        summary.percentage(summary.failed)
    )?;
    writeln!(output, "Skipped Tests: {}", summary.skipped)?;
    writeln!(output, "Error Tests: {}", summary.error)?;

    if summary.failures() > 0 {
        writeln!(output)?;
        writeln!(output, "--- Failed Tests ---")?;
        for entry in report.failures() {
            writeln!(output, "{}", entry.summary_line())?;
        }
    }

    Ok(())
}
