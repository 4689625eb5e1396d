//! Sandbox wrapping for markup, script and complete documents.

use crate::bootstrap::{bootstrap_script, guarded_run_script};
use crate::error::SandboxError;
use crate::html::escape_html;
use crate::style::PANEL_STYLE;
use preview_types::{DetectedKind, PreviewConfig};
use tracing::debug;

/// How a source text is wrapped for the isolated rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandboxMode {
    /// Already a complete document; passed through unchanged.
    FullDocument,
    /// Markup without a root element; becomes the body of a document.
    MarkupFragment,
    /// Bare script; run inside a guarded block.
    ScriptOnly,
}

impl TryFrom<DetectedKind> for SandboxMode {
    type Error = SandboxError;

    fn try_from(kind: DetectedKind) -> Result<Self, Self::Error> {
        match kind {
            DetectedKind::FullDocument => Ok(Self::FullDocument),
            DetectedKind::MarkupFragment => Ok(Self::MarkupFragment),
            DetectedKind::ScriptOnly => Ok(Self::ScriptOnly),
            DetectedKind::TeachingLanguage => Err(SandboxError::NotSandboxed(kind)),
        }
    }
}

impl From<SandboxMode> for DetectedKind {
    fn from(mode: SandboxMode) -> Self {
        match mode {
            SandboxMode::FullDocument => Self::FullDocument,
            SandboxMode::MarkupFragment => Self::MarkupFragment,
            SandboxMode::ScriptOnly => Self::ScriptOnly,
        }
    }
}

/// Render `source` with the default configuration.
pub fn render(source: &str, mode: SandboxMode) -> String {
    render_with_config(source, mode, &PreviewConfig::default())
}

/// Build the self-contained document for `source`.
///
/// Identical inputs always produce a byte-identical document.
pub fn render_with_config(source: &str, mode: SandboxMode, config: &PreviewConfig) -> String {
    let document = match mode {
        SandboxMode::FullDocument => source.to_string(),
        SandboxMode::ScriptOnly => {
            let body = format!(
                "{panel}\n<script>\n{run}\n</script>\n",
                panel = panel_element(config),
                run = guarded_run_script(source),
            );
            wrap(config, &body)
        }
        SandboxMode::MarkupFragment => {
            let body = format!("{source}\n{panel}\n", panel = panel_element(config));
            wrap(config, &body)
        }
    };
    debug!(
        ?mode,
        source_len = source.len(),
        document_len = document.len(),
        "rendered sandbox document"
    );
    document
}

fn panel_element(config: &PreviewConfig) -> String {
    format!(
        "<div id=\"{}\" class=\"preview-panel\"></div>",
        escape_html(&config.panel_id)
    )
}

/// Minimal document with the capture bootstrap in `<head>`, so inline
/// scripts anywhere in `body` are captured.
fn wrap(config: &PreviewConfig, body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&config.title)));
    out.push_str(&format!("<style>\n{PANEL_STYLE}\n</style>\n"));
    out.push_str(&format!(
        "<script>\n{}\n</script>\n",
        bootstrap_script(&config.panel_id)
    ));
    out.push_str("</head>\n<body>\n");
    out.push_str(body);
    out.push_str("</body>\n</html>\n");
    out
}
