// Report module - Report store, renderers and summary output

pub mod config;
pub mod csv;
pub mod error;
pub mod html;
pub mod json;
pub mod store;
pub mod summary;
pub mod system;
pub mod text;
pub mod xml;

use std::collections::HashMap;
use std::fmt;

pub use config::{DEFAULT_REPORT_FILE, ReportConfig, ReportFormat, ReportLevel};
pub use csv::CsvRenderer;
pub use error::ReportError;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use store::Report;
pub use system::SystemInfo;
pub use text::TextRenderer;
pub use xml::XmlRenderer;

/// Local time format used by every renderer
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renderer trait
pub trait Renderer {
    /// Format this renderer produces
    fn format(&self) -> ReportFormat;

    /// Serialize the report. Must not touch the filesystem.
    fn render(&self, report: &Report) -> Result<Vec<u8>, ReportError>;
}

/// Renderers keyed by the format they produce
pub struct Renderers {
    by_format: HashMap<ReportFormat, Box<dyn Renderer>>,
}

impl Renderers {
    /// Registry without any renderer
    pub fn empty() -> Self {
        Self {
            by_format: HashMap::new(),
        }
    }

    /// Registry with one renderer per built-in format
    pub fn builtin() -> Self {
        let mut renderers = Self::empty();
        renderers.register(Box::new(TextRenderer));
        renderers.register(Box::new(HtmlRenderer));
        renderers.register(Box::new(JsonRenderer));
        renderers.register(Box::new(XmlRenderer));
        renderers.register(Box::new(CsvRenderer));
        renderers
    }

    /// Register a renderer, replacing any previous one for the same format
    pub fn register(&mut self, renderer: Box<dyn Renderer>) -> Option<Box<dyn Renderer>> {
        self.by_format.insert(renderer.format(), renderer)
    }

    pub fn unregister(&mut self, format: ReportFormat) -> Option<Box<dyn Renderer>> {
        self.by_format.remove(&format)
    }

    pub fn get(&self, format: ReportFormat) -> Option<&dyn Renderer> {
        self.by_format.get(&format).map(|r| r.as_ref())
    }

    pub fn supports(&self, format: ReportFormat) -> bool {
        self.by_format.contains_key(&format)
    }
}

impl Default for Renderers {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Renderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formats: Vec<&str> = self.by_format.keys().map(|k| k.as_str()).collect();
        formats.sort_unstable();
        f.debug_struct("Renderers")
            .field("formats", &formats)
            .finish()
    }
}
