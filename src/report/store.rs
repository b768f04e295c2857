// Report store - owns every piece of run-scoped report state

use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, error, info, warn};

use super::{
    Renderers, ReportConfig, ReportError, ReportFormat, ReportLevel, SystemInfo, summary,
};
use crate::state::{
    MetricEntry, MetricType, Subsystem, Summary, TestResultEntry, TestResults, TestStatus,
};

/// Accumulates test results and metrics for one run and renders them.
///
/// The store is append-only between [`Report::create`] and
/// [`Report::destroy`]. In text mode every entry is also streamed to the
/// output file as it arrives, so a partial log survives a crash;
/// [`Report::generate`] then replaces that file with the full rendering.
#[derive(Debug)]
pub struct Report {
    config: ReportConfig,
    title: String,
    description: String,
    start_time: DateTime<Local>,
    end_time: Option<DateTime<Local>>,
    system: Option<SystemInfo>,
    results: TestResults,
    output: Option<File>,
    renderers: Renderers,
}

impl Report {
    pub const DEFAULT_TITLE: &'static str = "Vendor Test Suite Report";
    pub const DEFAULT_DESCRIPTION: &'static str = "Automated test results";

    /// Create a report and open its output file.
    ///
    /// Missing arguments fall back to the defaults. The file is opened for
    /// append or truncate according to `config.append`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Open`] if the output file cannot be opened.
    pub fn create(
        title: Option<&str>,
        description: Option<&str>,
        config: Option<ReportConfig>,
    ) -> Result<Self, ReportError> {
        let config = config.unwrap_or_default();

        let output = OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.append)
            .truncate(!config.append)
            .open(&config.output_path)
            .map_err(|source| ReportError::Open {
                path: config.output_path.clone(),
                source,
            })?;

        debug!(
            "Report opened: {} ({}, {})",
            config.output_path.display(),
            config.format,
            if config.append { "append" } else { "truncate" }
        );

        let system = config.include_system_info.then(SystemInfo::collect);

        Ok(Self {
            title: title.unwrap_or(Self::DEFAULT_TITLE).to_string(),
            description: description.unwrap_or(Self::DEFAULT_DESCRIPTION).to_string(),
            start_time: Local::now(),
            end_time: None,
            system,
            results: TestResults::new(),
            output: Some(output),
            renderers: Renderers::builtin(),
            config,
        })
    }

    /// Replace the renderer registry
    pub fn with_renderers(mut self, renderers: Renderers) -> Self {
        self.renderers = renderers;
        self
    }

    pub fn renderers_mut(&mut self) -> &mut Renderers {
        &mut self.renderers
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    /// Set by [`Report::generate`]
    pub fn end_time(&self) -> Option<DateTime<Local>> {
        self.end_time
    }

    /// End time, or now if the report has not been generated yet
    pub fn finished_at(&self) -> DateTime<Local> {
        self.end_time.unwrap_or_else(Local::now)
    }

    pub fn system(&self) -> Option<&SystemInfo> {
        self.system.as_ref()
    }

    pub fn summary(&self) -> Summary {
        self.results.summary()
    }

    pub fn results(&self) -> &[TestResultEntry] {
        self.results.all()
    }

    pub fn metrics(&self) -> &[MetricEntry] {
        self.results.metrics()
    }

    /// Fail and Error results in insertion order
    pub fn failures(&self) -> impl Iterator<Item = &TestResultEntry> {
        self.results.failures()
    }

    /// Whether metrics should appear in the final rendering
    pub fn renders_metrics(&self) -> bool {
        self.config.include_performance_metrics && !self.metrics().is_empty()
    }

    /// Record a test result. An empty name is ignored.
    pub fn add_test_result(
        &mut self,
        name: &str,
        subsystem: Subsystem,
        status: TestStatus,
        duration_ms: u64,
        message: Option<&str>,
    ) {
        if name.is_empty() {
            debug!("Ignoring test result without a name");
            return;
        }

        let entry = TestResultEntry::new(
            name,
            subsystem,
            status,
            duration_ms,
            message.unwrap_or_default(),
        );
        let line = entry.line();
        debug!("Recorded {}", line);
        self.results.add(entry);
        self.stream_line(&line);
    }

    /// Record a log line at `level` if it passes the configured minimum
    pub fn add_log(&mut self, level: ReportLevel, message: &str) {
        if level < self.config.min_level {
            return;
        }

        match level {
            ReportLevel::Info => info!("{}", message),
            ReportLevel::Warning => warn!("{}", message),
            ReportLevel::Error => error!("{}", message),
            ReportLevel::Debug => debug!("{}", message),
        }

        self.stream_line(&format!("[{}] {}", level, message));
    }

    pub fn add_info(&mut self, message: &str) {
        self.add_log(ReportLevel::Info, message);
    }

    pub fn add_warning(&mut self, message: &str) {
        self.add_log(ReportLevel::Warning, message);
    }

    pub fn add_error(&mut self, message: &str) {
        self.add_log(ReportLevel::Error, message);
    }

    pub fn add_debug(&mut self, message: &str) {
        self.add_log(ReportLevel::Debug, message);
    }

    /// Record a metric. Units default from the metric type; an empty name is ignored.
    pub fn add_metric(
        &mut self,
        name: &str,
        metric_type: MetricType,
        value: f64,
        units: Option<&str>,
    ) {
        if name.is_empty() {
            debug!("Ignoring metric without a name");
            return;
        }

        let metric = MetricEntry::new(name, metric_type, value, units);
        let line = format!("METRIC: {}", metric.line());
        self.results.add_metric(metric);
        self.stream_line(&line);
    }

    pub fn add_time_metric(&mut self, name: &str, microseconds: f64) {
        self.add_metric(name, MetricType::TimeMicroseconds, microseconds, None);
    }

    pub fn add_throughput_metric(&mut self, name: &str, bytes_per_sec: f64) {
        self.add_metric(name, MetricType::Throughput, bytes_per_sec, None);
    }

    pub fn add_latency_metric(&mut self, name: &str, milliseconds: f64) {
        self.add_metric(name, MetricType::LatencyMs, milliseconds, None);
    }

    pub fn add_frame_rate_metric(&mut self, name: &str, fps: f64) {
        self.add_metric(name, MetricType::FrameRate, fps, None);
    }

    /// Render the final report and replace the output file with it.
    ///
    /// The rendering is staged in a temporary file next to the report and
    /// moved over it only once fully written. On error the file still holds
    /// whatever was streamed during the run.
    ///
    /// # Errors
    ///
    /// Fails when no renderer is registered for the configured format, when
    /// rendering fails, or when the staged file cannot be written or moved.
    pub fn generate(&mut self) -> Result<(), ReportError> {
        self.end_time = Some(Local::now());

        let format = self.config.format;
        let bytes = match self.renderers.get(format) {
            Some(renderer) => renderer.render(self)?,
            None => {
                warn!("No renderer registered for {} reports", format);
                return Err(ReportError::UnsupportedFormat(format));
            }
        };

        // Streaming resumes on the replacement, never on the old inode.
        self.output = Some(replace_file(&self.config.output_path, &bytes)?);

        info!(
            "Generated {} report with {} result(s): {}",
            format,
            self.summary().total,
            self.config.output_path.display()
        );
        Ok(())
    }

    /// Path of the summary artifact: the report path with `.summary` appended
    pub fn summary_path(&self) -> PathBuf {
        let mut path = self.config.output_path.clone().into_os_string();
        path.push(".summary");
        PathBuf::from(path)
    }

    /// Write the summary view to [`Report::summary_path`]
    ///
    /// # Errors
    ///
    /// Returns an error if the summary file cannot be created or written.
    pub fn generate_summary(&self) -> Result<PathBuf, ReportError> {
        let path = self.summary_path();

        let mut bytes = Vec::new();
        if let Err(source) = self.print_summary(&mut bytes) {
            return Err(ReportError::Write {
                path: path.clone(),
                source,
            });
        }
        replace_file(&path, &bytes)?;

        debug!("Summary written: {}", path.display());
        Ok(path)
    }

    /// Write the summary view to `output`
    ///
    /// # Errors
    ///
    /// Propagates write errors from `output`.
    pub fn print_summary<W: Write>(&self, output: &mut W) -> io::Result<()> {
        summary::write_summary(self, output)
    }

    /// Close the output file and drop every entry
    pub fn destroy(mut self) {
        self.output = None;
        debug!(
            "Report destroyed: {} ({} result(s), {} metric(s))",
            self.config.output_path.display(),
            self.results.all().len(),
            self.results.metrics().len()
        );
    }

    fn stream_line(&mut self, line: &str) {
        if self.config.format != ReportFormat::Text {
            return;
        }
        let Some(file) = self.output.as_mut() else {
            return;
        };

        if let Err(e) = writeln!(file, "{}", line).and_then(|()| file.flush()) {
            warn!(
                "Failed to stream to {}: {}",
                self.config.output_path.display(),
                e
            );
        }
    }
}

/// Stage `bytes` in a temporary file beside `path`, then move it over `path`.
///
/// The file at `path` is left untouched unless the move succeeds.
fn replace_file(path: &Path, bytes: &[u8]) -> Result<File, ReportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".report");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Same mode File::create asks for; the umask still applies.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut staged = builder.tempfile_in(dir).map_err(|source| ReportError::Open {
        path: dir.to_path_buf(),
        source,
    })?;
    if let Err(source) = staged.write_all(bytes).and_then(|()| staged.flush()) {
        return Err(ReportError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    match staged.persist(path) {
        Ok(file) => Ok(file),
        Err(e) => Err(ReportError::Write {
            path: path.to_path_buf(),
            source: e.error,
        }),
    }
}

/// Destroy the report held in `slot`, if any. Safe to call repeatedly.
pub fn destroy_slot(slot: &mut Option<Report>) {
    if let Some(report) = slot.take() {
        report.destroy();
    }
}
