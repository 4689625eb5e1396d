//! Pipeline error types.

use preview_eval::EvalError;
use preview_sandbox::SandboxError;
use preview_types::ConfigError;
use thiserror::Error;

/// A failure inside one pipeline stage.
///
/// [`run`](crate::run) never returns these; it turns them into an
/// error-labeled document. They are public for callers driving the stages
/// themselves.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Sandbox(#[from] SandboxError),
}
