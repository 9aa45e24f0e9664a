//! Statement parsing modules
//! Contains specialized modules for different statement types

pub mod control_flow;
pub mod declarations;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{ParseError, ParseResult, ParserState};

/// Statement parsing trait
pub trait StatementParser {
    /// Parse one statement, including its terminating NEWLINE or block
    fn parse_statement(&mut self) -> ParseResult<Stmt>;

    /// Parse `: NEWLINE INDENT stmt+ DEDENT`
    fn parse_block(&mut self) -> ParseResult<Vec<Stmt>>;

    /// Consume the NEWLINE that ends a simple statement
    fn expect_line_end(&mut self) -> ParseResult<()>;
}

impl StatementParser for ParserState<'_> {
    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let start_span = self.span();

        match self.kind() {
            TokenKind::KwDef | TokenKind::KwClass if self.in_block() => {
                Err(ParseError::NestedDefinition {
                    construct: if self.at(&TokenKind::KwDef) {
                        "function"
                    } else {
                        "class"
                    },
                    span: start_span,
                })
            }
            TokenKind::KwDef => declarations::parse_function_stmt(self, start_span),
            TokenKind::KwClass => declarations::parse_class_stmt(self, start_span),
            TokenKind::KwIf => control_flow::parse_if_stmt(self, start_span),
            TokenKind::KwWhile => control_flow::parse_while_stmt(self, start_span),
            TokenKind::KwReturn => control_flow::parse_return_stmt(self, start_span),
            TokenKind::KwPass | TokenKind::KwBreak | TokenKind::KwContinue => {
                control_flow::parse_keyword_stmt(self, start_span)
            }
            TokenKind::KwReserved(_) | TokenKind::Indent => Err(self.unexpected()),
            // assignment or expression statement
            _ => declarations::parse_simple_stmt(self, start_span),
        }
    }

    fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.expect(&TokenKind::Colon, "':'")?;
        self.expect(&TokenKind::Newline, "end of line after ':'")?;
        self.expect(&TokenKind::Indent, "an indented block")?;

        if self.at(&TokenKind::Dedent) {
            return Err(ParseError::EmptyBlock { span: self.span() });
        }

        let body = self.in_block_body(|state| {
            let mut body = Vec::new();
            while !state.at(&TokenKind::Dedent) && !state.at_end() {
                body.push(state.parse_statement()?);
            }
            Ok(body)
        })?;
        self.expect(&TokenKind::Dedent, "end of block")?;
        Ok(body)
    }

    fn expect_line_end(&mut self) -> ParseResult<()> {
        if self.skip(&TokenKind::Newline) || self.at_end() {
            Ok(())
        } else {
            Err(self.expected("end of line"))
        }
    }
}
