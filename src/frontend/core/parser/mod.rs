//! Parser module
//!
//! Recursive-descent statement parser with a Pratt expression parser.
//! Turns the token stream (including layout tokens) into an AST `Module`.

pub mod ast;
pub mod parser_state;
pub mod pratt;
pub mod statements;
pub mod tree;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{ParseError, ParseResult, ParserState};
pub use pratt::*;
pub use statements::StatementParser;

use crate::frontend::core::lexer::tokens::*;
use crate::util::span::Span;

/// Parser options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat every `class Name` in the file as known before parsing starts,
    /// so `Name(...)` lowers to `new` even ahead of the definition
    pub predeclare_classes: bool,
}

/// Parse tokens into an AST module
///
/// Parsing stops at the first error.
///
/// # Example
/// ```python
/// def hello(name):
///     print("Hello,", name)
/// ```
pub fn parse(tokens: &[Token]) -> Result<Module, ParseError> {
    parse_with(tokens, ParseOptions::default())
}

/// Parse tokens into an AST module with explicit options
pub fn parse_with(
    tokens: &[Token],
    options: ParseOptions,
) -> Result<Module, ParseError> {
    let mut state = ParserState::new(tokens);
    if options.predeclare_classes {
        state.predeclare_classes();
    }

    let mut body = Vec::new();
    while !state.at_end() {
        body.push(state.parse_statement()?);
    }

    let span = match (body.first(), body.last()) {
        (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
        _ => Span::dummy(),
    };
    tracing::debug!(
        "parsed {} top-level statements, {} classes",
        body.len(),
        state.classes().count()
    );

    Ok(Module { body, span })
}

/// Parse a single expression followed by end of line or end of input
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut state = ParserState::new(tokens);
    let expr = state.parse_expression_bp(BP_LOWEST)?;
    state.expect_line_end()?;
    if !state.at_end() {
        return Err(state.expected("end of input"));
    }
    Ok(expr)
}
