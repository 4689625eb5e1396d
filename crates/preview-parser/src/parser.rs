//! Core parser infrastructure: token cursor, line handling, diagnostics.

use preview_lexer::token::{Token, TokenKind};
use preview_types::ast::{Program, Stmt};
use preview_types::{Diagnostic, DiagnosticCode, Diagnostics, SourceFile, Span};

/// Maximum nesting of list/dict literals before a right-hand side is kept
/// as raw text instead.
pub const MAX_LITERAL_DEPTH: u32 = 16;

/// The teaching-language parser.
///
/// Consumes the lexer's token stream one line at a time.
pub struct Parser<'src> {
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    source_file: &'src SourceFile,
    diagnostics: Diagnostics,
    /// Current list/dict literal nesting depth.
    pub(crate) literal_depth: u32,
}

/// Result of parsing. A program is always produced.
pub struct ParseResult {
    pub program: Program,
    pub diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: Vec<Token>, source_file: &'src SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            source_file,
            diagnostics: Diagnostics::empty(),
            literal_depth: 0,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `Eof` past the end.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        self.peek().map(|t| &t.kind).unwrap_or(&TokenKind::Eof)
    }

    /// Look ahead by `n` tokens from the current position.
    pub(crate) fn look_ahead(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    /// Advance the cursor by one and return the consumed token's span.
    pub(crate) fn advance(&mut self) -> Span {
        let span = self.current_span();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        span
    }

    pub(crate) fn current_span(&self) -> Span {
        self.peek()
            .map(|t| t.span)
            .or_else(|| self.tokens.last().map(|t| t.span))
            .unwrap_or_else(|| Span::point(1, 1))
    }

    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    pub(crate) fn check_exact(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check_exact(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn rewind(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub(crate) fn tokens_between(&self, start: usize, end: usize) -> &[Token] {
        &self.tokens[start.min(self.tokens.len())..end.min(self.tokens.len())]
    }

    // ── Line Handling ─────────────────────────────────────────────────────────

    pub(crate) fn skip_newlines(&mut self) {
        while self.check_exact(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Index of the `Newline`/`Eof` token ending the current line.
    pub(crate) fn line_end(&self) -> usize {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .position(|t| t.kind.is_line_end())
            .map(|offset| self.pos + offset)
            .unwrap_or(self.tokens.len())
    }

    /// Move the cursor to the end of the current line, leaving the line's
    /// `Newline`/`Eof` token unconsumed.
    pub(crate) fn synchronize(&mut self) {
        self.pos = self.line_end();
    }

    /// Span covering `tokens[start..end]`, if non-empty.
    pub(crate) fn span_of(&self, start: usize, end: usize) -> Option<Span> {
        let tokens = self.tokens_between(start, end);
        let first = tokens.first()?;
        let last = tokens.last()?;
        Some(first.span.merge(last.span))
    }

    /// The exact source text under `span`.
    pub(crate) fn text(&self, span: Span) -> &str {
        self.source_file.slice(span)
    }

    // ── Diagnostics ───────────────────────────────────────────────────────────

    pub(crate) fn note(&mut self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        let source_line = self
            .source_file
            .line(span.start_line)
            .unwrap_or("")
            .to_string();
        self.diagnostics
            .push(Diagnostic::new(code, message, span, source_line));
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the whole token stream into a [`Program`].
    pub fn parse(mut self) -> ParseResult {
        let start = self.current_span();
        let mut stmts: Vec<Stmt> = Vec::new();
        loop {
            self.skip_newlines();
            if self.at_end() {
                break;
            }
            stmts.push(self.parse_statement());
            self.synchronize();
        }
        let span = stmts
            .last()
            .map(|s| start.merge(s.span()))
            .unwrap_or(start);
        ParseResult {
            program: Program { stmts, span },
            diagnostics: self.diagnostics,
        }
    }
}
