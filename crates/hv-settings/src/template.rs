//! Template renderer seam.

use hv_config::Snapshot;

/// Sink that turns a snapshot into markup.
///
/// Rendering itself is out of scope here; the settings surface treats the
/// renderer as opaque and never inspects what comes back.
pub trait TemplateRenderer: Send + Sync {
    /// Renders the named template with the given snapshot.
    fn render(&self, template: &str, snapshot: &Snapshot) -> String;
}

/// Renderer that emits the snapshot as a JSON document.
///
/// Stands in for a real template engine in tests and headless setups,
/// the same shape the web frontend receives as initial state.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Creates a new JSON renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for JsonRenderer {
    fn render(&self, template: &str, snapshot: &Snapshot) -> String {
        let payload = serde_json::json!({
            "template": template,
            "state": snapshot,
        });
        payload.to_string()
    }
}
