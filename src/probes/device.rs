// Device node probe - checks that a subsystem's device node is usable

use std::fs::OpenOptions;
use std::path::Path;
use std::time::Instant;

use super::{Probe, ProbeContext, ProbeOutcome};
use crate::state::{MetricType, Subsystem, TestStatus};

/// How the node is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCheck {
    /// Open read-only, once per iteration, and record the mean open time
    Open,
    /// Only check that the node exists (opening may block)
    Present,
    /// Node is a directory that must be listable
    Directory,
}

/// Probe for a node under the device root. The path depends on the device index.
pub struct DeviceNodeProbe {
    id: &'static str,
    name: &'static str,
    subsystem: Subsystem,
    check: NodeCheck,
    node: fn(u32) -> String,
}

impl DeviceNodeProbe {
    pub fn new(
        id: &'static str,
        name: &'static str,
        subsystem: Subsystem,
        check: NodeCheck,
        node: fn(u32) -> String,
    ) -> Self {
        Self {
            id,
            name,
            subsystem,
            check,
            node,
        }
    }

    /// Node path relative to the device root
    pub fn node(&self, device_index: u32) -> String {
        (self.node)(device_index)
    }

    fn open_repeatedly(&self, path: &Path, iterations: u32) -> ProbeOutcome {
        let mut total_us = 0.0;

        for _ in 0..iterations {
            let start = Instant::now();
            if let Err(e) = OpenOptions::new().read(true).open(path) {
                let message = format!("{}: {}", path.display(), e);
                return ProbeOutcome::new(TestStatus::Error, message);
            }
            total_us += start.elapsed().as_secs_f64() * 1_000_000.0;
        }

        let message = format!("{} opened {} time(s)", path.display(), iterations);
        let metric = format!("{} Open", self.name);
        let mean_us = total_us / f64::from(iterations);
        ProbeOutcome::new(TestStatus::Pass, message)
            .with_metric(metric, MetricType::TimeMicroseconds, mean_us)
    }

    fn list(&self, path: &Path) -> ProbeOutcome {
        match std::fs::read_dir(path) {
            Ok(entries) => {
                let message = format!("{} lists {} entries", path.display(), entries.count());
                ProbeOutcome::new(TestStatus::Pass, message)
            }
            Err(e) => {
                let message = format!("{}: {}", path.display(), e);
                ProbeOutcome::new(TestStatus::Error, message)
            }
        }
    }
}

impl Probe for DeviceNodeProbe {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    fn run(&self, ctx: &ProbeContext) -> ProbeOutcome {
        let path = ctx.device_root.join(self.node(ctx.device_index));

        if !path.exists() {
            let message = format!("{} not present", path.display());
            return ProbeOutcome::new(TestStatus::Skip, message);
        }

        match self.check {
            NodeCheck::Open => self.open_repeatedly(&path, ctx.iterations.max(1)),
            NodeCheck::Present => {
                let message = format!("{} present", path.display());
                ProbeOutcome::new(TestStatus::Pass, message)
            }
            NodeCheck::Directory => self.list(&path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixListener;
    use std::path::PathBuf;

    fn context(root: PathBuf, iterations: u32) -> ProbeContext {
        ProbeContext {
            device_root: root,
            device_index: 0,
            width: 1280,
            height: 720,
            sample_rate: 44100,
            iterations,
        }
    }

    fn card_probe() -> DeviceNodeProbe {
        DeviceNodeProbe::new(
            "card",
            "DRM Card Node",
            Subsystem::Drm,
            NodeCheck::Open,
            |i| format!("dri/card{}", i),
        )
    }

    #[test]
    fn test_missing_node_is_skipped() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let outcome = card_probe().run(&context(temp_dir.path().to_path_buf(), 1));

        assert_eq!(outcome.status, TestStatus::Skip);
        assert!(outcome.message.contains("not present"));
        assert!(outcome.metrics.is_empty());
    }

    #[test]
    fn test_openable_node_passes_with_metric() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("dri")).expect("Failed to create dir");
        std::fs::write(temp_dir.path().join("dri/card0"), b"").expect("Failed to create node");

        let outcome = card_probe().run(&context(temp_dir.path().to_path_buf(), 3));

        assert_eq!(outcome.status, TestStatus::Pass);
        assert!(outcome.message.contains("opened 3 time(s)"));
        assert_eq!(outcome.metrics.len(), 1);
        assert_eq!(outcome.metrics[0].name, "DRM Card Node Open");
        assert_eq!(outcome.metrics[0].metric_type, MetricType::TimeMicroseconds);
    }

    #[test]
    fn test_unopenable_node_is_error() {
        // Sockets exist on disk but open(2) rejects them, even for root
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("dri")).expect("Failed to create dir");
        let node = temp_dir.path().join("dri/card0");
        let _listener = UnixListener::bind(&node).expect("Failed to bind socket");

        let outcome = card_probe().run(&context(temp_dir.path().to_path_buf(), 1));

        assert_eq!(outcome.status, TestStatus::Error);
        assert!(outcome.metrics.is_empty());
    }

    #[test]
    fn test_device_index_selects_node() {
        assert_eq!(card_probe().node(2), "dri/card2");
    }

    #[test]
    fn test_directory_check() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("bus/usb/001")).expect("Failed to create dir");

        let probe = DeviceNodeProbe::new(
            "bus",
            "USB Bus",
            Subsystem::Other,
            NodeCheck::Directory,
            |_| "bus/usb".to_string(),
        );
        let outcome = probe.run(&context(temp_dir.path().to_path_buf(), 1));

        assert_eq!(outcome.status, TestStatus::Pass);
        assert!(outcome.message.contains("1 entries"));
    }
}
