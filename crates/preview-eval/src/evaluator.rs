//! Statement evaluator for the teaching language.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use preview_types::ast::*;
use preview_types::{EntryKind, PreviewConfig, Sink, Value};
use tracing::{debug, warn};

/// Walks a [`Program`] top to bottom against a fresh [`Environment`].
pub struct Evaluator {
    /// Variable bindings for this run.
    pub env: Environment,
    /// Statements evaluated so far.
    pub gas: u64,
    pub gas_limit: u64,
    /// Entries written to the sink so far.
    pub entries_written: usize,
    pub max_output_entries: usize,
}

impl Evaluator {
    pub fn new(gas_limit: u64, max_output_entries: usize) -> Self {
        Self {
            env: Environment::new(),
            gas: 0,
            gas_limit,
            entries_written: 0,
            max_output_entries,
        }
    }

    pub fn from_config(config: &PreviewConfig) -> Self {
        Self::new(config.gas_limit, config.max_output_entries)
    }

    /// Consume one unit of gas. Returns error if exhausted.
    fn tick(&mut self) -> EvalResult<()> {
        self.gas += 1;
        if self.gas > self.gas_limit {
            warn!(limit = self.gas_limit, "gas exhausted");
            Err(EvalError::GasExhausted {
                limit: self.gas_limit,
            })
        } else {
            Ok(())
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statements
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate every statement in order, writing printed lines to `sink`.
    pub fn run(&mut self, program: &Program, sink: &mut dyn Sink) -> EvalResult<()> {
        for stmt in &program.stmts {
            self.eval_stmt(stmt, sink)?;
        }
        Ok(())
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt, sink: &mut dyn Sink) -> EvalResult<()> {
        self.tick()?;
        match stmt {
            Stmt::Assignment(assign) => {
                let value = self.eval_expr(&assign.value);
                debug!(name = %assign.target.name, kind = value.type_name(), "bind");
                self.env.define(&assign.target.name, value);
                Ok(())
            }
            Stmt::Print(call) => {
                let text = self.print_text(call);
                self.emit(sink, text)
            }
            Stmt::Skip(_) => Ok(()),
        }
    }

    fn emit(&mut self, sink: &mut dyn Sink, text: String) -> EvalResult<()> {
        if self.entries_written >= self.max_output_entries {
            warn!(limit = self.max_output_entries, "output limit exceeded");
            return Err(EvalError::OutputLimitExceeded {
                limit: self.max_output_entries,
            });
        }
        self.entries_written += 1;
        sink.append_entry(EntryKind::Info, text);
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expressions
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate an assigned value. Literals become structured values;
    /// anything kept verbatim by the parser stays raw text.
    pub fn eval_expr(&self, expr: &Expr) -> Value {
        match &expr.kind {
            ExprKind::StringLiteral(s) => Value::String(s.clone()),
            ExprKind::NumberLiteral(n) => Value::Number(*n),
            ExprKind::BoolLiteral(b) => Value::Boolean(*b),
            ExprKind::ListLiteral(items) => {
                Value::List(items.iter().map(|item| self.eval_expr(item)).collect())
            }
            ExprKind::DictLiteral(entries) => {
                let mut dict = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    Value::dict_insert(&mut dict, self.eval_expr(key), self.eval_expr(value));
                }
                Value::Dict(dict)
            }
            ExprKind::Identifier(name) => self
                .env
                .get(name)
                .cloned()
                .unwrap_or_else(|| Value::RawText(name.clone())),
            ExprKind::InterpolatedString(parts) => Value::String(self.interpolate(parts)),
            ExprKind::RawText(text) => Value::RawText(text.clone()),
        }
    }

    /// The line a `print(...)` call writes: each argument resolved, joined
    /// by single spaces.
    pub fn print_text(&self, call: &PrintCall) -> String {
        call.args
            .iter()
            .map(|arg| self.resolve_arg(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn resolve_arg(&self, arg: &Expr) -> String {
        match &arg.kind {
            ExprKind::StringLiteral(s) => s.clone(),
            ExprKind::InterpolatedString(parts) => self.interpolate(parts),
            ExprKind::Identifier(name) => match self.env.get(name) {
                Some(value) => value.to_string(),
                None => name.clone(),
            },
            ExprKind::RawText(text) => text.clone(),
            _ => self.eval_expr(arg).to_string(),
        }
    }

    /// Substitute bound placeholders; unbound ones keep their braces.
    fn interpolate(&self, parts: &[StringPart]) -> String {
        let mut out = String::new();
        for part in parts {
            match part {
                StringPart::Literal(text) => out.push_str(text),
                StringPart::Placeholder(ident) => match self.env.get(&ident.name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(&ident.name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::from_config(&PreviewConfig::default())
    }
}
