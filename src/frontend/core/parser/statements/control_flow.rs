//! Control flow statement parsing
//! Handles if/elif/else, while, return, pass, break and continue

use super::StatementParser;
use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{ParseResult, ParserState};
use crate::frontend::core::parser::pratt::BP_LOWEST;
use crate::util::span::Span;

/// Parse `if test: block [elif ...] [else: block]`.
/// Entered on `if` or, for a chained branch, on `elif`.
pub fn parse_if_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<Stmt> {
    state.bump(); // consume 'if' / 'elif'
    let test = state.parse_expression_bp(BP_LOWEST)?;
    let then_body = state.parse_block()?;

    let else_body = if state.at(&TokenKind::KwElif) {
        let elif_span = state.span();
        // each elif nests one `If` deeper
        Some(vec![state.nested(|state| parse_if_stmt(state, elif_span))?])
    } else if state.skip(&TokenKind::KwElse) {
        Some(state.parse_block()?)
    } else {
        None
    };

    Ok(Stmt::new(
        StmtKind::If {
            test,
            then_body,
            else_body,
        },
        span.to(state.prev_span()),
    ))
}

/// Parse `while test: block`
pub fn parse_while_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<Stmt> {
    state.bump(); // consume 'while'
    let test = state.parse_expression_bp(BP_LOWEST)?;
    let body = state.parse_block()?;

    Ok(Stmt::new(
        StmtKind::While { test, body },
        span.to(state.prev_span()),
    ))
}

/// Parse `return [expr]`
pub fn parse_return_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<Stmt> {
    state.bump(); // consume 'return'

    let value = if state.at(&TokenKind::Newline) || state.at_end() {
        None
    } else {
        Some(state.parse_expression_bp(BP_LOWEST)?)
    };

    let span = span.to(state.prev_span());
    state.expect_line_end()?;
    Ok(Stmt::new(StmtKind::Return(value), span))
}

/// Parse `pass`, `break` or `continue`
pub fn parse_keyword_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<Stmt> {
    let kind = match state.kind() {
        TokenKind::KwPass => StmtKind::Pass,
        TokenKind::KwBreak => StmtKind::Break,
        TokenKind::KwContinue => StmtKind::Continue,
        _ => return Err(state.unexpected()),
    };
    state.bump();
    state.expect_line_end()?;
    Ok(Stmt::new(kind, span))
}
