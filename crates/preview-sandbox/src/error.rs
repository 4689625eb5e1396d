//! Sandbox error types.

use preview_types::DetectedKind;
use thiserror::Error;

/// Errors that can occur when choosing how to wrap a source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SandboxError {
    /// The kind is handled by the teaching interpreter, not the sandbox.
    #[error("{0} content is not rendered by the sandbox")]
    NotSandboxed(DetectedKind),
}

/// Sandbox result type alias.
pub type SandboxResult<T> = Result<T, SandboxError>;
