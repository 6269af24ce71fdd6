//! # Render Backends — The Pluggable Byte Producers
//!
//! A [`RenderBackend`] turns a [`DocumentModel`] into bytes. Backends are
//! long-lived and expensive to start (the production backend wraps a
//! headless renderer process); they are owned and recycled by
//! [`crate::pool::RendererPool`], never shared between two in-flight
//! renders.
//!
//! [`TextBackend`] renders the fixed layout as UTF-8 text. It is the
//! deterministic backend used by the CLI and the test suite; byte-level
//! PDF concerns (font shaping, pagination) live in backends outside this
//! crate.

use thiserror::Error;

use crate::model::DocumentModel;

/// A backend-internal render failure.
#[derive(Error, Debug)]
#[error("render backend failure: {0}")]
pub struct BackendError(pub String);

/// One rendering backend instance.
///
/// `render` takes `&mut self` to model session exclusivity: a backend
/// serves one render at a time, even when the underlying process could in
/// principle multiplex. The model is borrowed immutably — a render never
/// mutates its input.
pub trait RenderBackend: Send + 'static {
    /// Render the document to bytes.
    fn render(&mut self, model: &DocumentModel) -> Result<Vec<u8>, BackendError>;

    /// Whether the backend can serve another render. Unhealthy backends
    /// are dropped and replaced by the pool.
    fn is_healthy(&self) -> bool {
        true
    }
}

/// Fixed-layout plain-text backend.
#[derive(Debug, Default)]
pub struct TextBackend {
    renders_served: u64,
}

impl TextBackend {
    /// Create a fresh backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many renders this instance has served.
    pub fn renders_served(&self) -> u64 {
        self.renders_served
    }
}

impl RenderBackend for TextBackend {
    fn render(&mut self, model: &DocumentModel) -> Result<Vec<u8>, BackendError> {
        self.renders_served += 1;

        let mut out = String::new();
        out.push_str(&model.title);
        out.push('\n');
        out.push_str(&"=".repeat(model.title.chars().count()));
        out.push('\n');

        for section in &model.sections {
            out.push('\n');
            out.push_str(section.kind.heading());
            out.push('\n');
            out.push_str(&"-".repeat(section.kind.heading().chars().count()));
            out.push('\n');
            for row in &section.rows {
                out.push_str(&row.cells.join(" | "));
                out.push('\n');
            }
        }

        Ok(out.into_bytes())
    }
}
