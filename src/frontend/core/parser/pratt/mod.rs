//! Pratt parser implementation
//! Handles expression parsing with binding power

pub mod led;
pub mod nud;
pub mod precedence;

pub use precedence::*;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{ParseResult, ParserState};

impl ParserState<'_> {
    /// Parse an expression whose operators all bind at least as tightly as `min_bp`
    pub fn parse_expression_bp(
        &mut self,
        min_bp: u8,
    ) -> ParseResult<Expr> {
        self.nested(|state| state.parse_expression_chain(min_bp))
    }

    /// Prefix followed by postfix and infix forms. Each form wraps `left` one
    /// level deeper, so it counts toward the nesting limit like recursion does.
    fn parse_expression_chain(
        &mut self,
        min_bp: u8,
    ) -> ParseResult<Expr> {
        let mut left = self.parse_prefix(min_bp)?;

        loop {
            match self.kind() {
                // Postfix forms bind tighter than every operator
                TokenKind::LParen => {
                    self.enter_nesting()?;
                    left = self.parse_call(left)?;
                }
                TokenKind::Dot => {
                    self.enter_nesting()?;
                    left = self.parse_attribute(left)?;
                }
                kind => {
                    let Some((lbp, rbp, op)) = infix_binding_power(kind) else {
                        break;
                    };
                    if lbp < min_bp {
                        break;
                    }
                    self.enter_nesting()?;
                    left = self.parse_binary(left, op, rbp)?;
                }
            }
        }

        Ok(left)
    }
}
