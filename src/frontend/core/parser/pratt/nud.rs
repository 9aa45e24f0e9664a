//! Prefix expression parsing (nud - null denotation)
//!
//! Literals, names, parenthesized groups and unary operators.

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{ParseResult, ParserState};
use crate::frontend::core::parser::pratt::precedence::*;

impl ParserState<'_> {
    /// Parse the prefix part of an expression. `min_bp` is the binding power
    /// the caller requires, which rejects `not` in operand position (`a + not b`).
    pub(crate) fn parse_prefix(
        &mut self,
        min_bp: u8,
    ) -> ParseResult<Expr> {
        let span = self.span();

        let literal = match self.kind() {
            TokenKind::IntLiteral(n) => Some(Literal::Int(*n)),
            TokenKind::FloatLiteral(x) => Some(Literal::Float(*x)),
            TokenKind::StringLiteral(s) => Some(Literal::String(s.clone())),
            TokenKind::BoolLiteral(b) => Some(Literal::Bool(*b)),
            TokenKind::NoneLiteral => Some(Literal::None),
            _ => None,
        };
        if let Some(literal) = literal {
            self.bump();
            return Ok(Expr::Constant(literal, span));
        }

        match self.kind() {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.bump();
                Ok(Expr::Name(name, span))
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_expression_bp(BP_LOWEST)?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Minus => {
                self.bump();
                let operand = self.parse_expression_bp(BP_UNARY)?;
                Ok(Expr::UnaryOp {
                    op: UnOp::Neg,
                    span: span.to(operand.span()),
                    operand: Box::new(operand),
                })
            }
            // Unary plus is the identity
            TokenKind::Plus => {
                self.bump();
                self.parse_expression_bp(BP_UNARY)
            }
            TokenKind::KwNot if min_bp <= BP_NOT => {
                self.bump();
                let operand = self.parse_expression_bp(BP_NOT)?;
                Ok(Expr::UnaryOp {
                    op: UnOp::Not,
                    span: span.to(operand.span()),
                    operand: Box::new(operand),
                })
            }
            TokenKind::KwNot | TokenKind::KwReserved(_) => Err(self.unexpected()),
            _ => Err(self.expected("expression")),
        }
    }
}
