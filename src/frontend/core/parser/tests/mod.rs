//! Parser tests module
//!
//! - state: ParserState 单元测试
//! - expressions: 表达式与优先级测试
//! - statements: 语句与块结构测试
//! - errors: 语法错误测试
//! - tree: 树视图与文本转储测试
//! - fuzz: 属性测试（确定性、无 panic）

mod expressions;

use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::{parse, parse_with, Expr, Module, ParseError, ParseOptions};

pub(crate) fn parse_source(source: &str) -> Module {
    let tokens = tokenize(source).unwrap();
    parse(&tokens).unwrap()
}

pub(crate) fn parse_error(source: &str) -> ParseError {
    let tokens = tokenize(source).unwrap();
    parse(&tokens).unwrap_err()
}

pub(crate) fn parse_predeclared(source: &str) -> Module {
    let tokens = tokenize(source).unwrap();
    parse_with(
        &tokens,
        ParseOptions {
            predeclare_classes: true,
        },
    )
    .unwrap()
}

/// Parse one expression statement and return its expression
pub(crate) fn expr(source: &str) -> Expr {
    let tokens = tokenize(source).unwrap();
    crate::frontend::core::parser::parse_expression(&tokens).unwrap()
}

/// Fully parenthesized rendering, spans ignored
pub(crate) fn sexpr(expr: &Expr) -> String {
    match expr {
        Expr::Constant(literal, _) => literal.to_string(),
        Expr::Name(name, _) => name.clone(),
        Expr::BinOp {
            op, left, right, ..
        } => format!("({} {} {})", sexpr(left), op.symbol(), sexpr(right)),
        Expr::UnaryOp { op, operand, .. } => format!("({}{})", op.symbol(), sexpr(operand)),
        Expr::Call { callee, args, .. } => format!("{}({})", sexpr(callee), join(args)),
        Expr::MethodCall {
            receiver,
            method,
            args,
            ..
        } => format!("{}.{}({})", sexpr(receiver), method, join(args)),
        Expr::New { class, args, .. } => format!("new {}({})", class, join(args)),
        Expr::AttributeRef { receiver, attr, .. } => format!("{}.{}", sexpr(receiver), attr),
    }
}

fn join(args: &[Expr]) -> String {
    args.iter().map(sexpr).collect::<Vec<_>>().join(", ")
}
