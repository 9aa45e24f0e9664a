//! Infix and postfix expression parsing (led - left denotation)

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{ParseResult, ParserState};
use crate::frontend::core::parser::pratt::precedence::*;

impl ParserState<'_> {
    /// Parse `left op right`; the operator token is current
    pub(crate) fn parse_binary(
        &mut self,
        left: Expr,
        op: BinOp,
        rbp: u8,
    ) -> ParseResult<Expr> {
        self.bump(); // consume operator
        let right = self.parse_expression_bp(rbp)?;
        Ok(Expr::BinOp {
            op,
            span: left.span().to(right.span()),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Parse `callee(args)`. A bare name of a known class becomes `New`.
    pub(crate) fn parse_call(
        &mut self,
        callee: Expr,
    ) -> ParseResult<Expr> {
        self.bump(); // consume '('
        let args = self.parse_call_args()?;
        let span = callee.span().to(self.prev_span());

        match callee {
            Expr::Name(class, _) if self.is_class(&class) => Ok(Expr::New { class, args, span }),
            callee => Ok(Expr::Call {
                callee: Box::new(callee),
                args,
                span,
            }),
        }
    }

    /// Parse `.attr` or `.method(args)` after `receiver`
    pub(crate) fn parse_attribute(
        &mut self,
        receiver: Expr,
    ) -> ParseResult<Expr> {
        self.bump(); // consume '.'
        let (name, name_span) = self.expect_identifier("attribute name after '.'")?;

        if self.skip(&TokenKind::LParen) {
            let args = self.parse_call_args()?;
            Ok(Expr::MethodCall {
                span: receiver.span().to(self.prev_span()),
                receiver: Box::new(receiver),
                method: name,
                args,
            })
        } else {
            Ok(Expr::AttributeRef {
                span: receiver.span().to(name_span),
                receiver: Box::new(receiver),
                attr: name,
            })
        }
    }

    /// Parse comma-separated arguments after '(' up to and including ')'
    fn parse_call_args(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        while !self.at(&TokenKind::RParen) {
            args.push(self.parse_expression_bp(BP_LOWEST)?);
            if !self.skip(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen, "',' or ')'")?;
        Ok(args)
    }
}
