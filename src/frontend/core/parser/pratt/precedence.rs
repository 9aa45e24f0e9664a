//! Precedence handling for Pratt parser
//!
//! Binding power levels, loosest first. Left-associative operators bind their
//! right operand one level tighter; `**` binds it at unary level, which makes
//! it right-associative and lets `2 ** -1` parse.

use crate::frontend::core::lexer::tokens::TokenKind;
use crate::frontend::core::parser::ast::BinOp;

/// Binding power levels for Pratt parser
pub const BP_LOWEST: u8 = 0;
pub const BP_OR: u8 = 1;
pub const BP_AND: u8 = 2;
pub const BP_NOT: u8 = 3;
pub const BP_CMP: u8 = 4;
pub const BP_ADD: u8 = 5;
pub const BP_MUL: u8 = 6;
pub const BP_UNARY: u8 = 7;
pub const BP_POW: u8 = 8;
pub const BP_CALL: u8 = 9;

/// Left binding power, right binding power and operator for an infix token
pub fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8, BinOp)> {
    let (bp, op) = match kind {
        TokenKind::KwOr => (BP_OR, BinOp::Or),
        TokenKind::KwAnd => (BP_AND, BinOp::And),
        TokenKind::EqEq => (BP_CMP, BinOp::Eq),
        TokenKind::Neq => (BP_CMP, BinOp::Neq),
        TokenKind::Lt => (BP_CMP, BinOp::Lt),
        TokenKind::Le => (BP_CMP, BinOp::Le),
        TokenKind::Gt => (BP_CMP, BinOp::Gt),
        TokenKind::Ge => (BP_CMP, BinOp::Ge),
        TokenKind::Plus => (BP_ADD, BinOp::Add),
        TokenKind::Minus => (BP_ADD, BinOp::Sub),
        TokenKind::Star => (BP_MUL, BinOp::Mul),
        TokenKind::Slash => (BP_MUL, BinOp::Div),
        TokenKind::SlashSlash => (BP_MUL, BinOp::FloorDiv),
        TokenKind::Percent => (BP_MUL, BinOp::Mod),
        // Right-associative
        TokenKind::StarStar => return Some((BP_POW, BP_UNARY, BinOp::Pow)),
        _ => return None,
    };
    Some((bp, bp + 1, op))
}

/// Operator applied by an augmented assignment token (`+=` → `+`)
pub fn augmented_op(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::PlusEq => Some(BinOp::Add),
        TokenKind::MinusEq => Some(BinOp::Sub),
        TokenKind::StarEq => Some(BinOp::Mul),
        TokenKind::SlashEq => Some(BinOp::Div),
        _ => None,
    }
}
