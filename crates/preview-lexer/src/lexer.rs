//! Core lexer: converts teaching-language source to a token stream.
//!
//! The lexer never fails. Characters the language has no use for become
//! [`TokenKind::Unknown`] tokens plus a diagnostic, and a string that runs
//! into the end of its line becomes [`TokenKind::UnterminatedString`]. The
//! parser decides what such lines mean.
//!
//! - `#` comments run to end of line and are dropped
//! - newlines are tokens; statements are one per line
//! - `f"..."` / `f'...'` produce a single [`TokenKind::FString`]

use preview_types::{Diagnostic, DiagnosticCode, Diagnostics, SourceFile, Span};

use crate::token::{Token, TokenKind};

/// The teaching-language lexer.
pub struct Lexer<'src> {
    source: &'src str,
    bytes: &'src [u8],
    source_file: &'src SourceFile,
    /// Current byte offset into `bytes`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based, in bytes).
    col: u32,
    diagnostics: Diagnostics,
}

/// Result of lexing: tokens plus any diagnostics collected.
pub struct LexResult {
    /// The token stream (always ends with [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl<'src> Lexer<'src> {
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self {
            source: &source_file.source,
            bytes: source_file.source.as_bytes(),
            source_file,
            pos: 0,
            line: 1,
            col: 1,
            diagnostics: Diagnostics::empty(),
        }
    }

    /// Lex the entire source into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        LexResult {
            tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span::point(self.line, self.col)
    }

    fn span_from(&self, start_line: u32, start_col: u32) -> Span {
        Span::new(
            start_line,
            start_col,
            self.line,
            self.col.saturating_sub(1).max(start_col),
        )
    }

    fn note(&mut self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        let source_line = self.source_file.line(span.start_line).unwrap_or("");
        self.diagnostics
            .push(Diagnostic::new(code, message, span, source_line));
    }

    // ─────────────────────────────────────────────────────────────
    // Whitespace & comments
    // ─────────────────────────────────────────────────────────────

    /// Skip spaces, tabs and carriage returns (newlines are tokens).
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\x0c') = self.peek() {
            self.advance();
        }
    }

    /// Skip a `#` comment up to (not including) the newline.
    fn skip_comment(&mut self) -> bool {
        if self.peek() != Some(b'#') {
            return false;
        }
        while let Some(ch) = self.peek() {
            if ch == b'\n' {
                break;
            }
            self.advance();
        }
        true
    }

    // ─────────────────────────────────────────────────────────────
    // Token scanning
    // ─────────────────────────────────────────────────────────────

    fn scan_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            if !self.skip_comment() {
                break;
            }
        }

        let start_pos = self.pos;
        let start_line = self.line;
        let start_col = self.col;
        let Some(ch) = self.advance() else {
            return Token::new(TokenKind::Eof, self.current_span());
        };

        let kind = match ch {
            b'\n' => {
                return Token::new(TokenKind::Newline, Span::point(start_line, start_col));
            }
            b'"' | b'\'' => return self.scan_string(ch, start_line, start_col, false),
            b'0'..=b'9' => return self.scan_number(start_pos, start_line, start_col),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                return self.scan_word(start_pos, start_line, start_col);
            }

            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b'=' => self.pair(b'=', TokenKind::EqEq, TokenKind::Eq),
            b'!' => self.pair(b'=', TokenKind::BangEq, TokenKind::Symbol('!')),
            b'<' => self.pair(b'=', TokenKind::LessEq, TokenKind::Less),
            b'>' => self.pair(b'=', TokenKind::GreaterEq, TokenKind::Greater),
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b'.' => TokenKind::Dot,
            b';' => TokenKind::Semicolon,

            other if other.is_ascii_punctuation() => TokenKind::Symbol(other as char),
            other if other.is_ascii() => {
                let c = other as char;
                self.note(
                    DiagnosticCode::UNKNOWN_CHARACTER,
                    format!("unexpected character {c:?}"),
                    self.span_from(start_line, start_col),
                );
                TokenKind::Unknown(c)
            }
            _ => {
                // Non-ASCII outside a string: consume the whole character.
                let c = self.source[start_pos..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                for _ in 1..c.len_utf8() {
                    self.advance();
                }
                self.note(
                    DiagnosticCode::UNKNOWN_CHARACTER,
                    format!("unexpected character '{c}'"),
                    self.span_from(start_line, start_col),
                );
                TokenKind::Unknown(c)
            }
        };
        Token::new(kind, self.span_from(start_line, start_col))
    }

    /// Two-character operator if the next byte is `second`, else `single`.
    fn pair(&mut self, second: u8, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Numbers & words
    // ─────────────────────────────────────────────────────────────

    fn scan_number(&mut self, start_pos: usize, start_line: u32, start_col: u32) -> Token {
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9')) {
            self.advance();
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }
        let value: f64 = self.source[start_pos..self.pos].parse().unwrap_or(0.0);
        Token::new(
            TokenKind::NumberLit(value),
            self.span_from(start_line, start_col),
        )
    }

    fn scan_word(&mut self, start_pos: usize, start_line: u32, start_col: u32) -> Token {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.source[start_pos..self.pos];

        if matches!(text, "f" | "F") {
            if let Some(quote @ (b'"' | b'\'')) = self.peek() {
                self.advance();
                return self.scan_string(quote, start_line, start_col, true);
            }
        }

        let kind = TokenKind::from_keyword(text)
            .unwrap_or_else(|| TokenKind::Identifier(text.to_string()));
        Token::new(kind, self.span_from(start_line, start_col))
    }

    // ─────────────────────────────────────────────────────────────
    // Strings
    // ─────────────────────────────────────────────────────────────

    /// Scan a string body after its opening `quote` has been consumed.
    fn scan_string(
        &mut self,
        quote: u8,
        start_line: u32,
        start_col: u32,
        interpolated: bool,
    ) -> Token {
        let mut buf: Vec<u8> = Vec::new();
        loop {
            match self.peek() {
                None | Some(b'\n') => {
                    let span = self.span_from(start_line, start_col);
                    self.note(
                        DiagnosticCode::UNTERMINATED_STRING,
                        "unterminated string literal",
                        span,
                    );
                    let text = String::from_utf8_lossy(&buf).into_owned();
                    return Token::new(TokenKind::UnterminatedString(text), span);
                }
                Some(ch) if ch == quote => {
                    self.advance();
                    let text = String::from_utf8_lossy(&buf).into_owned();
                    let kind = if interpolated {
                        TokenKind::FString(text)
                    } else {
                        TokenKind::StringLiteral(text)
                    };
                    return Token::new(kind, self.span_from(start_line, start_col));
                }
                Some(b'\\') => self.scan_escape(&mut buf),
                Some(ch) => {
                    self.advance();
                    buf.push(ch);
                }
            }
        }
    }

    /// Resolve one escape sequence. Unknown escapes keep their backslash.
    fn scan_escape(&mut self, buf: &mut Vec<u8>) {
        self.advance(); // consume '\'
        let resolved = match self.peek() {
            Some(b'n') => b'\n',
            Some(b't') => b'\t',
            Some(b'r') => b'\r',
            Some(b'\\') => b'\\',
            Some(b'\'') => b'\'',
            Some(b'"') => b'"',
            _ => {
                buf.push(b'\\');
                return;
            }
        };
        self.advance();
        buf.push(resolved);
    }
}
