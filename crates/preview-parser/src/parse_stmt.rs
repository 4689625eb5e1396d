//! Statement parsing: one statement per line.

use crate::parser::Parser;
use preview_lexer::token::TokenKind;
use preview_types::ast::*;
use tracing::debug;

impl<'src> Parser<'src> {
    /// Parse the current line. Never fails: unrecognised lines become
    /// [`Stmt::Skip`].
    pub(crate) fn parse_statement(&mut self) -> Stmt {
        let start = self.position();
        let is_name = matches!(self.peek_kind(), TokenKind::Identifier(_));
        let is_print = matches!(self.peek_kind(), TokenKind::Identifier(name) if name == "print");
        let next = self.look_ahead(1).clone();
        let parsed = match next {
            TokenKind::LParen if is_print => self.parse_print().map(Stmt::Print),
            TokenKind::Eq if is_name => self.parse_assignment().map(Stmt::Assignment),
            _ => None,
        };
        match parsed {
            Some(stmt) => stmt,
            None => {
                self.rewind(start);
                self.skip_line()
            }
        }
    }

    /// `name = value`
    ///
    /// `==` lexes as its own token, so comparisons never reach here.
    fn parse_assignment(&mut self) -> Option<Assignment> {
        let target = match self.peek_kind() {
            TokenKind::Identifier(name) => Ident::new(name.clone(), self.current_span()),
            _ => return None,
        };
        self.advance(); // eat identifier
        self.advance(); // eat `=`

        let rhs_start = self.position();
        let rhs_end = self.line_end();
        if rhs_start == rhs_end {
            return None;
        }
        let value = self.parse_assigned_value(rhs_start, rhs_end);
        let span = target.span.merge(value.span);
        Some(Assignment {
            target,
            value,
            span,
        })
    }

    /// `print(args)`: the closing parenthesis must be the last token on the
    /// line, or be followed only by one `;`, and must close the opening one.
    fn parse_print(&mut self) -> Option<PrintCall> {
        let start_span = self.advance(); // eat `print`
        self.advance(); // eat `(`
        let args_start = self.position();
        let mut line_end = self.line_end();
        if line_end > args_start
            && matches!(
                self.tokens_between(line_end - 1, line_end),
                [last] if last.kind == TokenKind::Semicolon
            )
        {
            line_end -= 1;
        }
        if line_end <= args_start {
            return None;
        }
        let close = line_end - 1;
        let closing = self.tokens_between(close, line_end).first()?;
        if closing.kind != TokenKind::RParen {
            return None;
        }
        let close_span = closing.span;

        let args = self.parse_print_args(args_start, close)?;
        Some(PrintCall {
            args,
            span: start_span.merge(close_span),
        })
    }

    /// Consume the rest of the line as a [`SkipLine`].
    fn skip_line(&mut self) -> Stmt {
        let start = self.position();
        let end = self.line_end();
        let span = self.span_of(start, end).unwrap_or_else(|| self.current_span());
        let text = self.text(span).to_string();
        debug!(line = span.start_line, %text, "skipping unsupported line");
        self.synchronize();
        Stmt::Skip(SkipLine { text, span })
    }
}
