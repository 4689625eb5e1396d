//! Expression parsing: assignment values, structural literals, print
//! arguments and f-string placeholders.

use crate::parser::{Parser, MAX_LITERAL_DEPTH};
use preview_lexer::token::{Token, TokenKind};
use preview_types::ast::*;
use preview_types::{DiagnosticCode, Span};
use tracing::warn;

impl<'src> Parser<'src> {
    // ── Assignment values ─────────────────────────────────────────────────────

    /// Classify the right-hand side `tokens[start..end]`.
    ///
    /// In order: a lone string, number (optionally negative) or boolean
    /// literal; then a `[...]`/`{...}` structural literal; anything else, and
    /// any structural literal that does not parse, is kept as raw text.
    pub(crate) fn parse_assigned_value(&mut self, start: usize, end: usize) -> Expr {
        let span = self
            .span_of(start, end)
            .unwrap_or_else(|| self.current_span());
        let tokens = self.tokens_between(start, end);
        let scalar = scalar_value(tokens);
        let delimited = matches!(
            (tokens.first().map(|t| &t.kind), tokens.last().map(|t| &t.kind)),
            (Some(TokenKind::LBracket), Some(TokenKind::RBracket))
                | (Some(TokenKind::LBrace), Some(TokenKind::RBrace))
        );

        if let Some(kind) = scalar {
            self.rewind(end);
            return Expr::new(kind, span);
        }

        if delimited {
            self.rewind(start);
            self.literal_depth = 0;
            if let Some(expr) = self.parse_literal() {
                if self.position() == end {
                    return expr;
                }
            }
            self.rewind(end);
            warn!(line = span.start_line, "structural literal kept as raw text");
            self.note(
                DiagnosticCode::LITERAL_FALLBACK,
                "literal could not be parsed; keeping the text as written",
                span,
            );
        }

        self.rewind(end);
        Expr::new(ExprKind::RawText(self.text(span).to_string()), span)
    }

    // ── Structural literals ───────────────────────────────────────────────────

    /// Parse one literal: string, number, boolean, list or dict.
    pub(crate) fn parse_literal(&mut self) -> Option<Expr> {
        let span = self.current_span();
        let kind = match self.peek_kind().clone() {
            TokenKind::LBracket => return self.nested(Self::parse_list_literal),
            TokenKind::LBrace => return self.nested(Self::parse_dict_literal),
            TokenKind::Minus => return self.parse_negative_number(),
            TokenKind::StringLiteral(s) => ExprKind::StringLiteral(s),
            TokenKind::NumberLit(n) => ExprKind::NumberLiteral(n),
            TokenKind::True => ExprKind::BoolLiteral(true),
            TokenKind::False => ExprKind::BoolLiteral(false),
            // Lower-case spellings are accepted inside containers.
            TokenKind::Identifier(word) if word == "true" => ExprKind::BoolLiteral(true),
            TokenKind::Identifier(word) if word == "false" => ExprKind::BoolLiteral(false),
            _ => return None,
        };
        self.advance();
        Some(Expr::new(kind, span))
    }

    /// Run a container parser one nesting level deeper.
    fn nested(&mut self, parse: fn(&mut Self) -> Option<Expr>) -> Option<Expr> {
        if self.literal_depth >= MAX_LITERAL_DEPTH {
            return None;
        }
        self.literal_depth += 1;
        let result = parse(self);
        self.literal_depth -= 1;
        result
    }

    fn parse_negative_number(&mut self) -> Option<Expr> {
        let minus = self.advance();
        let next = self.current_span();
        match self.peek_kind() {
            TokenKind::NumberLit(n) if adjacent(minus, next) => {
                let value = -*n;
                self.advance();
                Some(Expr::new(ExprKind::NumberLiteral(value), minus.merge(next)))
            }
            _ => None,
        }
    }

    /// `[a, b, ...]` with an optional trailing comma.
    fn parse_list_literal(&mut self) -> Option<Expr> {
        let start = self.advance(); // eat `[`
        let mut items = Vec::new();
        while !self.check_exact(&TokenKind::RBracket) {
            items.push(self.parse_literal()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        if !self.check_exact(&TokenKind::RBracket) {
            return None;
        }
        let end = self.advance();
        Some(Expr::new(ExprKind::ListLiteral(items), start.merge(end)))
    }

    /// `{key: value, ...}` with scalar keys and an optional trailing comma.
    fn parse_dict_literal(&mut self) -> Option<Expr> {
        let start = self.advance(); // eat `{`
        let mut entries = Vec::new();
        while !self.check_exact(&TokenKind::RBrace) {
            let key = self.parse_literal()?;
            if matches!(
                key.kind,
                ExprKind::ListLiteral(_) | ExprKind::DictLiteral(_)
            ) {
                return None;
            }
            if !self.eat(&TokenKind::Colon) {
                return None;
            }
            let value = self.parse_literal()?;
            entries.push((key, value));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        if !self.check_exact(&TokenKind::RBrace) {
            return None;
        }
        let end = self.advance();
        Some(Expr::new(ExprKind::DictLiteral(entries), start.merge(end)))
    }

    // ── Print arguments ───────────────────────────────────────────────────────

    /// Split `tokens[start..end]` at top-level commas into print arguments.
    ///
    /// Returns `None` when the brackets are unbalanced, which means the line
    /// was not a single `print(...)` call after all.
    pub(crate) fn parse_print_args(&mut self, start: usize, end: usize) -> Option<Vec<Expr>> {
        let tokens = self.tokens_between(start, end);
        if tokens.is_empty() {
            return Some(Vec::new());
        }

        let mut groups = Vec::new();
        let mut group_start = start;
        let mut depth = 0u32;
        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.checked_sub(1)?;
                }
                TokenKind::Comma if depth == 0 => {
                    groups.push((group_start, start + i, token.span));
                    group_start = start + i + 1;
                }
                _ => {}
            }
        }
        if depth != 0 {
            return None;
        }
        let last_span = tokens[tokens.len() - 1].span;
        groups.push((group_start, end, last_span));

        Some(
            groups
                .into_iter()
                .map(|(from, to, fallback)| self.print_arg(from, to, fallback))
                .collect(),
        )
    }

    /// One print argument. A lone string, f-string or name keeps its meaning;
    /// anything else is printed exactly as written.
    fn print_arg(&self, start: usize, end: usize, fallback: Span) -> Expr {
        let Some(span) = self.span_of(start, end) else {
            return Expr::new(ExprKind::RawText(String::new()), fallback);
        };
        let kind = match self.tokens_between(start, end) {
            [Token {
                kind: TokenKind::StringLiteral(s),
                ..
            }] => ExprKind::StringLiteral(s.clone()),
            [Token {
                kind: TokenKind::FString(text),
                span,
            }] => ExprKind::InterpolatedString(fstring_parts(text, *span)),
            [Token {
                kind: TokenKind::Identifier(name),
                ..
            }] => ExprKind::Identifier(name.clone()),
            _ => ExprKind::RawText(self.text(span).to_string()),
        };
        Expr::new(kind, span)
    }
}

/// A lone scalar literal on the right-hand side of an assignment.
fn scalar_value(tokens: &[Token]) -> Option<ExprKind> {
    match tokens {
        [only] => match &only.kind {
            TokenKind::StringLiteral(s) => Some(ExprKind::StringLiteral(s.clone())),
            TokenKind::NumberLit(n) => Some(ExprKind::NumberLiteral(*n)),
            TokenKind::True => Some(ExprKind::BoolLiteral(true)),
            TokenKind::False => Some(ExprKind::BoolLiteral(false)),
            _ => None,
        },
        [minus, number] if minus.kind == TokenKind::Minus && adjacent(minus.span, number.span) => {
            match number.kind {
                TokenKind::NumberLit(n) => Some(ExprKind::NumberLiteral(-n)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// `true` when `b` starts right where `a` ends.
fn adjacent(a: Span, b: Span) -> bool {
    a.end_line == b.start_line && a.end_col + 1 == b.start_col
}

/// Split f-string text into literal runs and `{identifier}` placeholders.
///
/// Braces around anything other than a bare identifier stay literal text.
pub(crate) fn fstring_parts(text: &str, span: Span) -> Vec<StringPart> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        literal.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                if !literal.is_empty() {
                    parts.push(StringPart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(StringPart::Placeholder(Ident::new(&after[..close], span)));
                rest = &after[close + 1..];
            }
            _ => {
                literal.push('{');
                rest = after;
            }
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        parts.push(StringPart::Literal(literal));
    }
    parts
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
