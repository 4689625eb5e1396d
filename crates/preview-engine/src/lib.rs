//! Lesson preview engine.
//!
//! ```text
//! source → Dispatcher ─┬─ FullDocument / MarkupFragment / ScriptOnly → Sandbox Renderer ─┐
//!                      └─ TeachingLanguage → Lexer → Parser → Evaluator → Console ───────┴→ document
//! ```
//!
//! Every run produces exactly one [`RenderedDocument`]. Nothing here panics
//! or returns an error to the caller for any input text.

pub mod dispatch;
pub mod error;
pub mod pipeline;

pub use dispatch::classify;
pub use error::PreviewError;
pub use pipeline::{preview, run, run_with_config, source_hash, PreviewResult, RenderedDocument};
pub use preview_types::{DetectedKind, DiagnosticCode, Diagnostics, OutputEntry, PreviewConfig};

/// Parse a JSON config, falling back to defaults when it is invalid.
pub fn config_or_default(json: &str) -> PreviewConfig {
    match PreviewConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %PreviewError::from(err), "using default preview config");
            PreviewConfig::default()
        }
    }
}
