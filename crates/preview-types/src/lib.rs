//! Shared types for the lesson preview engine.
//!
//! This crate defines the data model shared by every stage of the preview
//! pipeline: source spans, the classification of a submitted text, the
//! teaching-language AST, runtime values, the output log with its `Sink`
//! capability, configuration, and non-fatal diagnostics.

mod config;
mod diagnostic;
mod kind;
mod output;
mod span;
mod value;
pub mod ast;

pub use config::{ConfigError, PreviewConfig};
pub use diagnostic::{Diagnostic, DiagnosticCategory, DiagnosticCode, Diagnostics, MAX_DIAGNOSTICS};
pub use kind::DetectedKind;
pub use output::{EntryKind, OutputEntry, OutputLog, Sink};
pub use span::{SourceFile, Span};
pub use value::Value;
