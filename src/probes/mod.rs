// Probes module - subsystem checks that produce report entries

pub mod device;

use std::path::PathBuf;

pub use device::{DeviceNodeProbe, NodeCheck};

use crate::state::{MetricType, Subsystem, TestStatus};

/// Parameters shared by every probe in a run.
///
/// `width`, `height` and `sample_rate` describe the requested mode. Node
/// probes only record them in the run log; they do not negotiate modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeContext {
    pub device_root: PathBuf,
    pub device_index: u32,
    pub width: u32,
    pub height: u32,
    pub sample_rate: u32,
    pub iterations: u32,
}

/// Metric emitted by a probe alongside its result
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeMetric {
    pub name: String,
    pub metric_type: MetricType,
    pub value: f64,
}

/// What a probe observed
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub status: TestStatus,
    pub message: String,
    pub metrics: Vec<ProbeMetric>,
}

impl ProbeOutcome {
    pub fn new(status: TestStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            metrics: Vec::new(),
        }
    }

    pub fn with_metric(
        mut self,
        name: impl Into<String>,
        metric_type: MetricType,
        value: f64,
    ) -> Self {
        self.metrics.push(ProbeMetric {
            name: name.into(),
            metric_type,
            value,
        });
        self
    }
}

/// A single subsystem check
pub trait Probe {
    /// Short identifier matched by `--test`
    fn id(&self) -> &str;

    /// Name recorded in the report
    fn name(&self) -> &str;

    fn subsystem(&self) -> Subsystem;

    fn run(&self, ctx: &ProbeContext) -> ProbeOutcome;
}

/// Heading printed before a subsystem's probes
pub fn heading(subsystem: Subsystem) -> &'static str {
    match subsystem {
        Subsystem::Drm => "DRM",
        Subsystem::Audio => "Audio",
        Subsystem::Video => "Video",
        Subsystem::Other => "USB",
    }
}

/// Probes for one subsystem, in execution order
pub fn catalog(subsystem: Subsystem) -> Vec<Box<dyn Probe>> {
    let probes = match subsystem {
        Subsystem::Drm => vec![
            DeviceNodeProbe::new(
                "card",
                "DRM Card Node",
                subsystem,
                NodeCheck::Open,
                |i| format!("dri/card{}", i),
            ),
            DeviceNodeProbe::new(
                "render",
                "DRM Render Node",
                subsystem,
                NodeCheck::Open,
                |i| format!("dri/renderD{}", 128 + i),
            ),
        ],
        Subsystem::Audio => vec![
            DeviceNodeProbe::new(
                "control",
                "ALSA Control Node",
                subsystem,
                NodeCheck::Open,
                |i| format!("snd/controlC{}", i),
            ),
            DeviceNodeProbe::new(
                "playback",
                "Audio Playback Node",
                subsystem,
                NodeCheck::Present,
                |i| format!("snd/pcmC{}D0p", i),
            ),
            DeviceNodeProbe::new(
                "capture",
                "Audio Capture Node",
                subsystem,
                NodeCheck::Present,
                |i| format!("snd/pcmC{}D0c", i),
            ),
        ],
        Subsystem::Video => vec![DeviceNodeProbe::new(
            "capture",
            "Video Capture Node",
            subsystem,
            NodeCheck::Open,
            |i| format!("video{}", i),
        )],
        Subsystem::Other => vec![DeviceNodeProbe::new(
            "bus",
            "USB Bus",
            subsystem,
            NodeCheck::Directory,
            |_| "bus/usb".to_string(),
        )],
    };

    probes
        .into_iter()
        .map(|probe| Box::new(probe) as Box<dyn Probe>)
        .collect()
}
