//! Pipeline orchestration: Dispatcher → Sandbox Renderer | Teaching
//! Interpreter → rendered document.

use crate::dispatch::classify;
use crate::error::PreviewError;
use preview_eval::evaluate_into;
use preview_sandbox::{
    render_console_document, render_error_document, render_with_config, SandboxMode,
};
use preview_types::{DetectedKind, Diagnostics, OutputEntry, OutputLog, PreviewConfig};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

/// The single document produced by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub kind: DetectedKind,
    /// Self-contained document text for the isolated rendering surface.
    pub document: String,
    /// Interpreter output. Empty for sandboxed kinds, whose output is only
    /// known once the document runs.
    pub entries: Vec<OutputEntry>,
    /// Message of the fatal interpreter error, if the run ended in one.
    pub fatal: Option<String>,
    /// Lexer and parser notes from the interpreter path: literals kept as
    /// raw text, unterminated strings, unknown characters.
    pub diagnostics: Diagnostics,
}

impl RenderedDocument {
    pub fn is_error(&self) -> bool {
        self.fatal.is_some()
    }
}

/// Serialisable result for hosts: the rendered document plus a hash of the
/// source, so identical input can skip re-rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResult {
    /// Lower-case hex SHA-256 of the source text.
    pub source_hash: String,
    #[serde(flatten)]
    pub rendered: RenderedDocument,
}

/// Run the pipeline with the default configuration.
pub fn run(source: &str) -> RenderedDocument {
    run_with_config(source, &PreviewConfig::default())
}

/// Classify `source` and produce its document. Never fails: any stage
/// failure becomes an error-labeled document.
pub fn run_with_config(source: &str, config: &PreviewConfig) -> RenderedDocument {
    let kind = classify(source);
    let rendered = if kind.is_sandboxed() {
        match sandbox(source, kind, config) {
            Ok(document) => RenderedDocument {
                kind,
                document,
                entries: Vec::new(),
                fatal: None,
                diagnostics: Diagnostics::empty(),
            },
            Err(err) => failed(kind, OutputLog::new(), Diagnostics::empty(), &err, config),
        }
    } else {
        interpret(source, config)
    };
    info!(
        kind = %rendered.kind,
        entries = rendered.entries.len(),
        document_len = rendered.document.len(),
        fatal = rendered.is_error(),
        "preview run complete"
    );
    rendered
}

/// [`run_with_config`] plus the source hash.
pub fn preview(source: &str, config: &PreviewConfig) -> PreviewResult {
    PreviewResult {
        source_hash: source_hash(source),
        rendered: run_with_config(source, config),
    }
}

/// Lower-case hex SHA-256 of `source`.
pub fn source_hash(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn sandbox(
    source: &str,
    kind: DetectedKind,
    config: &PreviewConfig,
) -> Result<String, PreviewError> {
    let mode = SandboxMode::try_from(kind)?;
    Ok(render_with_config(source, mode, config))
}

fn interpret(source: &str, config: &PreviewConfig) -> RenderedDocument {
    let kind = DetectedKind::TeachingLanguage;
    let mut log = OutputLog::new();
    let evaluation = evaluate_into(source, &mut log, config);
    match evaluation.result {
        Ok(()) => RenderedDocument {
            kind,
            document: render_console_document(&log, config),
            entries: log.into_entries(),
            fatal: None,
            diagnostics: evaluation.diagnostics,
        },
        Err(err) => failed(
            kind,
            log,
            evaluation.diagnostics,
            &PreviewError::from(err),
            config,
        ),
    }
}

fn failed(
    kind: DetectedKind,
    log: OutputLog,
    diagnostics: Diagnostics,
    err: &PreviewError,
    config: &PreviewConfig,
) -> RenderedDocument {
    let message = err.to_string();
    warn!(%kind, %message, "preview run failed");
    RenderedDocument {
        kind,
        document: render_error_document(&log, &message, config),
        entries: log.into_entries(),
        fatal: Some(message),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_hash_known_value() {
        assert_eq!(
            source_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_teaching_kind_is_not_sandboxed() {
        let err = sandbox("print(1)", DetectedKind::TeachingLanguage, &PreviewConfig::default())
            .unwrap_err();
        assert!(matches!(err, PreviewError::Sandbox(_)));
    }
}
