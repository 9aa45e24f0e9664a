//! Lexer tests module
//!
//! - basic: 基础测试（标识符、关键字、换行）
//! - indentation: INDENT/DEDENT 布局测试
//! - literals: 字面量测试（整数、浮点、字符串）
//! - operators: 运算符与分隔符测试
//! - errors: 错误处理测试

mod errors;
mod indentation;

use crate::frontend::core::lexer::{tokenize, TokenKind};

/// Token kinds of `source`, panicking on lexer errors
pub(crate) fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

pub(crate) fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}
