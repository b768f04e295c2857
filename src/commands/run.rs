// Run command - execute probes and produce the report

use anyhow::Result;
use std::io::{self, Write};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::Config;
use crate::execution::ProbeRunner;
use crate::probes;
use crate::report::{Report, store::destroy_slot};

/// Run the selected probes and write the report. Probe failures do not make this fail.
pub fn run_suite(cli: &Cli, config: &Config) -> Result<()> {
    let selection = cli.selection();
    let ctx = cli.probe_context(config);
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Vendor Test Suite")?;
    writeln!(stdout, "=================")?;

    let mut report = if cli.no_report {
        None
    } else {
        let report_config = cli.report_config(config)?;
        let description = cli.report_description(ctx.iterations);
        match Report::create(
            Some(selection.report_title()),
            Some(&description),
            Some(report_config),
        ) {
            Ok(report) => {
                info!(
                    "Report will be generated in {} format to {}",
                    report.config().format,
                    report.config().output_path.display()
                );
                Some(report)
            }
            Err(e) => {
                warn!("Failed to create test report: {}", e);
                None
            }
        }
    };

    if let Some(report) = report.as_mut() {
        report.add_info(&format!(
            "Device root {} index {}, {}x{}, {} Hz, {} iteration(s)",
            ctx.device_root.display(),
            ctx.device_index,
            ctx.width,
            ctx.height,
            ctx.sample_rate,
            ctx.iterations
        ));
    }

    let runner = ProbeRunner::new(ctx, cli.test_name.clone());
    for subsystem in selection.subsystems() {
        writeln!(
            stdout,
            "\n===== Running {} Tests =====\n",
            probes::heading(subsystem)
        )?;

        let stats = runner.run(&probes::catalog(subsystem), report.as_mut(), &mut stdout)?;
        if stats.executed == 0 {
            writeln!(stdout, "No matching tests")?;
        }
    }

    writeln!(stdout, "\nTests completed")?;

    if let Some(report) = report.as_mut() {
        match report.generate() {
            Ok(()) => {
                writeln!(
                    stdout,
                    "Test report generated: {}",
                    report.config().output_path.display()
                )?;

                match report.generate_summary() {
                    Ok(path) => writeln!(stdout, "Test summary generated: {}", path.display())?,
                    Err(e) => warn!("Failed to generate test summary: {}", e),
                }

                writeln!(stdout)?;
                report.print_summary(&mut stdout)?;
            }
            Err(e) => warn!("Failed to generate test report: {}", e),
        }
    }
    destroy_slot(&mut report);

    Ok(())
}
