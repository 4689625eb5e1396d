//! Teaching-language evaluator.
//!
//! Runs a parsed program against a fresh environment and captures every
//! `print` line into an [`OutputLog`](preview_types::OutputLog). Output goes
//! through an explicitly passed [`Sink`]; the evaluator has no ambient state.
//!
//! Panics are caught with `catch_unwind` and reported as
//! [`EvalError::Internal`]. That only works where panics unwind: on
//! `wasm32-unknown-unknown` the default panic strategy is `abort`, so there
//! the no-failure guarantee rests on no panic being reachable at all.

pub mod env;
pub mod error;
pub mod evaluator;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;

use preview_parser::parse_source;
use preview_types::{Diagnostics, OutputLog, PreviewConfig, Sink, SourceFile};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Evaluate `source` with the default configuration.
pub fn evaluate(source: &str) -> EvalResult<OutputLog> {
    evaluate_with_config(source, &PreviewConfig::default())
}

/// Evaluate `source` and collect its output.
pub fn evaluate_with_config(source: &str, config: &PreviewConfig) -> EvalResult<OutputLog> {
    let mut log = OutputLog::new();
    evaluate_into(source, &mut log, config).result?;
    Ok(log)
}

/// Outcome of one interpreter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Lexer and parser notes, kept even when the run fails.
    pub diagnostics: Diagnostics,
    pub result: EvalResult<()>,
}

/// Evaluate `source`, writing entries to `sink` as they are produced.
///
/// Entries written before a fatal error stay in the sink. A panic anywhere in
/// lexing, parsing or evaluation is reported as [`EvalError::Internal`].
pub fn evaluate_into(source: &str, sink: &mut dyn Sink, config: &PreviewConfig) -> Evaluation {
    let mut diagnostics = Diagnostics::empty();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let source_file = SourceFile::new("lesson.py", source);
        let parsed = parse_source(&source_file);
        debug!(
            statements = parsed.program.stmts.len(),
            diagnostics = parsed.diagnostics.total,
            "parsed teaching program"
        );
        diagnostics = parsed.diagnostics;
        let mut evaluator = Evaluator::from_config(config);
        evaluator.run(&parsed.program, sink)
    }));
    let result = match outcome {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(%message, "interpreter panicked");
            Err(EvalError::Internal(message))
        }
    };
    Evaluation {
        diagnostics,
        result,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
