//! Teaching-language parser: converts a token stream into an AST.
//!
//! Parsing never fails. Each source line becomes one statement; lines that
//! are neither an assignment nor a print call become `Stmt::Skip`.

mod parse_expr;
mod parse_stmt;
mod parser;

pub use parser::{ParseResult, Parser, MAX_LITERAL_DEPTH};

use preview_lexer::Lexer;
use preview_types::SourceFile;

/// Lex and parse `source_file` in one step, merging lexer and parser
/// diagnostics.
pub fn parse_source(source_file: &SourceFile) -> ParseResult {
    let lexed = Lexer::new(source_file).lex();
    let mut result = Parser::new(lexed.tokens, source_file).parse();
    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(result.diagnostics);
    result.diagnostics = diagnostics;
    result
}
