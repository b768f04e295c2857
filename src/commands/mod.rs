// Commands module - handles CLI command execution

use anyhow::{Context, Result};
use std::path::Path;

pub mod run;

pub use run::run_suite;

use crate::cli::Cli;
use crate::config::Config;

/// Handle shell completion
pub fn handle_completion(shell_type: &str) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Shell, generate};

    let shell = match shell_type.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        _ => {
            anyhow::bail!(
                "Unsupported shell: {}. Supported: bash, zsh, fish, elvish, powershell",
                shell_type
            );
        }
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = std::io::stdout();

    generate(shell, &mut cmd, name, &mut stdout);

    Ok(())
}

/// Print the effective configuration
pub fn show_config(cli: &Cli, config: Option<&Config>) -> Result<()> {
    let defaults = Config::default();
    let effective = config.unwrap_or(&defaults);
    let report = cli.report_config(effective)?;
    let ctx = cli.probe_context(effective);

    println!("Current configuration:");
    println!("\n  Report:");
    if cli.no_report {
        println!("    Disabled (--no-report)");
    } else {
        println!("    Format: {}", report.format);
        println!("    File: {}", report.output_path.display());
        println!("    Append: {}", report.append);
        println!("    Include timestamp: {}", report.include_timestamp);
        println!("    Include system info: {}", report.include_system_info);
        println!(
            "    Include performance metrics: {}",
            report.include_performance_metrics
        );
        println!("    Minimum level: {}", report.min_level);
    }

    println!("\n  Probes:");
    println!("    Subsystem: {}", cli.subsystem);
    println!("    Device root: {}", ctx.device_root.display());
    println!("    Device index: {}", ctx.device_index);
    println!("    Dimensions: {}x{}", ctx.width, ctx.height);
    println!("    Sample rate: {} Hz", ctx.sample_rate);
    println!("    Iterations: {}", ctx.iterations);

    if config.is_some() {
        println!("\n  Configuration file loaded");
    } else {
        println!("\n  No configuration file loaded");
        println!("  Create one with: vendor-test-suite --init-config .vendortestrc.toml");
    }

    println!("\nConfiguration precedence:");
    println!("  1. Command-line arguments (highest)");
    println!("  2. Configuration file");
    println!("  3. Built-in defaults (lowest)");

    Ok(())
}

/// Write the default configuration to `path`
pub fn init_config(path: &Path) -> Result<()> {
    let toml_content = Config::default().to_toml();
    std::fs::write(path, toml_content).with_context(|| {
        format!("Failed to write configuration file: {}", path.display())
    })?;

    println!("Configuration file created: {}", path.display());
    println!("\nYou can now edit the file to customize your settings.");
    Ok(())
}
