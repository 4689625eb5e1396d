use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of diagnostics stored per run. The total is still counted.
pub const MAX_DIAGNOSTICS: usize = 20;

/// Diagnostic category, determined by code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Lexical,
    Grammar,
}

/// Numeric diagnostic code (W100–W299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiagnosticCode(pub u16);

impl DiagnosticCode {
    // ── Lexical (W100–W199) ──
    pub const UNKNOWN_CHARACTER: Self = Self(100);
    pub const UNTERMINATED_STRING: Self = Self(101);

    // ── Grammar (W200–W299) ──
    pub const LITERAL_FALLBACK: Self = Self(200);

    /// Get the category for this code.
    pub fn category(self) -> DiagnosticCategory {
        match self.0 {
            100..=199 => DiagnosticCategory::Lexical,
            _ => DiagnosticCategory::Grammar,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Grammar => write!(f, "grammar"),
        }
    }
}

/// A non-fatal note about something the lexer or parser had to tolerate.
///
/// Diagnostics never stop a run. They exist so hosts and tests can see why a
/// line was read the way it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub category: DiagnosticCategory,
    pub message: String,
    pub span: Span,
    /// The source line the diagnostic points into.
    pub source_line: String,
}

impl Diagnostic {
    pub fn new(
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            span,
            source_line: source_line.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.span, self.code, self.category, self.message
        )
    }
}

/// Bounded collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub items: Vec<Diagnostic>,
    pub total: usize,
}

impl Diagnostics {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Add a diagnostic, respecting the [`MAX_DIAGNOSTICS`] limit.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.items.len() < MAX_DIAGNOSTICS {
            self.items.push(diagnostic);
        }
        self.total += 1;
    }

    /// Append every diagnostic from `other`, keeping the combined total.
    pub fn extend(&mut self, other: Diagnostics) {
        let dropped = other.total - other.items.len();
        for d in other.items {
            self.push(d);
        }
        self.total += dropped;
    }

    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.items.iter().any(|d| d.code == code)
    }
}
