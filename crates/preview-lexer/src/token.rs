//! Token types for the teaching-language lexer.
//!
//! Defines [`TokenKind`] covering every lexeme the lexer distinguishes and
//! [`Token`], which pairs a kind with a source [`Span`].

use preview_types::Span;
use std::fmt;

/// Reserved words of the teaching language.
///
/// `True`, `False` and `None` get their own token kinds; the rest are
/// carried as [`TokenKind::Keyword`] so that lines using them (control flow,
/// definitions, imports) are recognised and skipped rather than mistaken for
/// assignments to a variable of that name.
pub const ALL_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Literals ──────────────────────────────────────────────

    /// Unsigned numeric literal: `42`, `3.14`. A leading `-` is a separate token.
    NumberLit(f64),
    /// Quoted string with escapes resolved: `"hi"`, `'hi'`
    StringLiteral(String),
    /// `f"..."` / `f'...'`: the text between the quotes, escapes resolved.
    FString(String),
    /// A string that reached end of line before its closing quote.
    UnterminatedString(String),
    /// `True`
    True,
    /// `False`
    False,
    /// `None`
    NoneLit,

    // ── Names ─────────────────────────────────────────────────

    Identifier(String),
    /// Any other reserved word.
    Keyword(&'static str),

    // ── Operators ─────────────────────────────────────────────

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    BangEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,

    // ── Punctuation ───────────────────────────────────────────

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Dot,
    Semicolon,

    // ── Fallbacks ─────────────────────────────────────────────

    /// ASCII punctuation with no dedicated kind (`@`, `&`, `|`, ...).
    Symbol(char),
    /// A character the language has no use for outside strings.
    Unknown(char),

    // ── Special ───────────────────────────────────────────────

    Newline,
    Eof,
}

impl TokenKind {
    /// Map a word to its keyword token, if it is reserved.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "True" => Some(TokenKind::True),
            "False" => Some(TokenKind::False),
            "None" => Some(TokenKind::NoneLit),
            _ => ALL_KEYWORDS
                .iter()
                .find(|&&kw| kw == text)
                .map(|&kw| TokenKind::Keyword(kw)),
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::True | TokenKind::False | TokenKind::NoneLit | TokenKind::Keyword(_)
        )
    }

    /// `true` for tokens that end a line.
    pub fn is_line_end(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::NumberLit(n) => write!(f, "{n}"),
            TokenKind::StringLiteral(s) => write!(f, "\"{s}\""),
            TokenKind::FString(s) => write!(f, "f\"{s}\""),
            TokenKind::UnterminatedString(s) => write!(f, "\"{s}"),
            TokenKind::True => f.write_str("True"),
            TokenKind::False => f.write_str("False"),
            TokenKind::NoneLit => f.write_str("None"),
            TokenKind::Identifier(s) => f.write_str(s),
            TokenKind::Keyword(kw) => f.write_str(kw),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::Percent => f.write_str("%"),
            TokenKind::Eq => f.write_str("="),
            TokenKind::EqEq => f.write_str("=="),
            TokenKind::BangEq => f.write_str("!="),
            TokenKind::Less => f.write_str("<"),
            TokenKind::Greater => f.write_str(">"),
            TokenKind::LessEq => f.write_str("<="),
            TokenKind::GreaterEq => f.write_str(">="),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Symbol(c) | TokenKind::Unknown(c) => write!(f, "{c}"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::Eof => f.write_str("end of file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword_recognises_all() {
        for &kw in ALL_KEYWORDS {
            let kind = TokenKind::from_keyword(kw)
                .unwrap_or_else(|| panic!("from_keyword should recognise '{kw}'"));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_literal_keywords_have_own_kinds() {
        assert_eq!(TokenKind::from_keyword("True"), Some(TokenKind::True));
        assert_eq!(TokenKind::from_keyword("False"), Some(TokenKind::False));
        assert_eq!(TokenKind::from_keyword("None"), Some(TokenKind::NoneLit));
        assert_eq!(TokenKind::from_keyword("def"), Some(TokenKind::Keyword("def")));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        for name in ["true", "false", "none", "If", "PRINT", "print", "name"] {
            assert!(
                TokenKind::from_keyword(name).is_none(),
                "'{name}' is not reserved"
            );
        }
    }

    #[test]
    fn test_display_roundtrip_keywords() {
        for &kw in ALL_KEYWORDS {
            let kind = TokenKind::from_keyword(kw).unwrap();
            assert_eq!(kind.to_string(), kw);
        }
    }

    #[test]
    fn test_display_operators() {
        assert_eq!(TokenKind::EqEq.to_string(), "==");
        assert_eq!(TokenKind::BangEq.to_string(), "!=");
        assert_eq!(TokenKind::Symbol('@').to_string(), "@");
        assert_eq!(TokenKind::FString("a{b}".into()).to_string(), "f\"a{b}\"");
    }
}
