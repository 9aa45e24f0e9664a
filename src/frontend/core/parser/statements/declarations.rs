//! Declaration statement parsing
//! Handles function and class definitions, assignments and expression statements

use super::StatementParser;
use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{ParseError, ParseResult, ParserState};
use crate::frontend::core::parser::pratt::{augmented_op, BP_LOWEST};
use crate::util::span::Span;

/// Parse `def name(params): block`
pub fn parse_function_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<Stmt> {
    let def = parse_function_def(state, span)?;
    let span = def.span;
    Ok(Stmt::new(StmtKind::FunctionDef(def), span))
}

/// Parse a function definition; also used for methods
pub fn parse_function_def(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<FunctionDef> {
    state.expect(&TokenKind::KwDef, "'def'")?;
    let (name, _) = state.expect_identifier("function name")?;
    tracing::trace!("parsing function '{}'", name);

    state.expect(&TokenKind::LParen, "'('")?;
    let params = parse_params(state)?;
    let body = state.parse_block()?;

    Ok(FunctionDef {
        name,
        params,
        body,
        span: span.to(state.prev_span()),
    })
}

/// Parse parameter names up to and including ')'
fn parse_params(state: &mut ParserState<'_>) -> ParseResult<Vec<Param>> {
    let mut params: Vec<Param> = Vec::new();

    while !state.at(&TokenKind::RParen) {
        let (name, span) = state.expect_identifier("parameter name")?;
        if params.iter().any(|p| p.name == name) {
            return Err(ParseError::DuplicateParameter { name, span });
        }
        params.push(Param { name, span });

        if !state.skip(&TokenKind::Comma) {
            break;
        }
    }
    state.expect(&TokenKind::RParen, "',' or ')'")?;

    Ok(params)
}

/// Parse `class Name: block` whose block holds only method definitions
pub fn parse_class_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<Stmt> {
    state.bump(); // consume 'class'
    let (name, _) = state.expect_identifier("class name")?;
    // Declared before the body so methods can instantiate their own class
    state.declare_class(&name);
    tracing::trace!("parsing class '{}'", name);

    state.expect(&TokenKind::Colon, "':'")?;
    state.expect(&TokenKind::Newline, "end of line after ':'")?;
    state.expect(&TokenKind::Indent, "an indented block")?;
    if state.at(&TokenKind::Dedent) {
        return Err(ParseError::EmptyBlock { span: state.span() });
    }

    let mut methods = Vec::new();
    while !state.at(&TokenKind::Dedent) && !state.at_end() {
        if !state.at(&TokenKind::KwDef) {
            return Err(state.expected("method definition"));
        }
        let method_span = state.span();
        methods.push(parse_function_def(state, method_span)?);
    }
    state.expect(&TokenKind::Dedent, "end of block")?;

    Ok(Stmt::new(
        StmtKind::ClassDef { name, methods },
        span.to(state.prev_span()),
    ))
}

/// Parse an assignment, augmented assignment or expression statement
pub fn parse_simple_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> ParseResult<Stmt> {
    let expr = state.parse_expression_bp(BP_LOWEST)?;

    let kind = if state.at(&TokenKind::Eq) {
        check_target(&expr)?;
        state.bump();
        let value = state.parse_expression_bp(BP_LOWEST)?;
        StmtKind::Assign {
            target: expr,
            value,
        }
    } else if let Some(op) = augmented_op(state.kind()) {
        check_target(&expr)?;
        state.bump();
        let value = state.parse_expression_bp(BP_LOWEST)?;
        // `x += v` is `x = x + v`
        let value = Expr::BinOp {
            op,
            span: expr.span().to(value.span()),
            left: Box::new(expr.clone()),
            right: Box::new(value),
        };
        StmtKind::Assign {
            target: expr,
            value,
        }
    } else {
        StmtKind::Expr(expr)
    };

    let span = span.to(state.prev_span());
    state.expect_line_end()?;
    Ok(Stmt::new(kind, span))
}

fn check_target(target: &Expr) -> ParseResult<()> {
    if target.is_assignable() {
        return Ok(());
    }
    let description = match target {
        Expr::Constant(..) => "a literal",
        Expr::Call { .. } | Expr::MethodCall { .. } | Expr::New { .. } => "a call",
        Expr::BinOp { .. } | Expr::UnaryOp { .. } => "an operator expression",
        Expr::Name(..) | Expr::AttributeRef { .. } => "an expression",
    };
    Err(ParseError::InvalidAssignTarget {
        target: description,
        span: target.span(),
    })
}
