//! Parser state and error handling

use crate::frontend::core::lexer::tokens::*;
use crate::util::span::Span;
use indexmap::IndexSet;

static EOF: TokenKind = TokenKind::Eof;

/// 表达式与代码块的默认最大嵌套深度
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parse error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Expected a specific token or construct
    #[error("expected {expected}, found {found} at {}", .span.start)]
    ExpectedToken {
        expected: String,
        found: TokenKind,
        span: Span,
    },
    /// Unexpected token encountered
    #[error("unexpected {found} at {}", .span.start)]
    UnexpectedToken { found: TokenKind, span: Span },
    /// INDENT directly followed by DEDENT
    #[error("empty block at {}: expected at least one statement", .span.start)]
    EmptyBlock { span: Span },
    #[error("cannot assign to {target} at {}", .span.start)]
    InvalidAssignTarget { target: &'static str, span: Span },
    #[error("duplicate parameter '{name}' at {}", .span.start)]
    DuplicateParameter { name: String, span: Span },
    /// Reserved keyword outside the supported subset
    #[error("'{keyword}' is not supported at {}", .span.start)]
    Unsupported { keyword: String, span: Span },
    /// `def` or `class` inside a block
    #[error("{construct} definitions must be at module level, found one at {}", .span.start)]
    NestedDefinition {
        construct: &'static str,
        span: Span,
    },
    #[error("nesting deeper than {max_depth} levels at {}", .span.start)]
    NestingTooDeep { max_depth: usize, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::ExpectedToken { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::EmptyBlock { span }
            | ParseError::InvalidAssignTarget { span, .. }
            | ParseError::DuplicateParameter { span, .. }
            | ParseError::Unsupported { span, .. }
            | ParseError::NestedDefinition { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parser state for Pratt parsing
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Class names declared so far; calls to these become `New`
    classes: IndexSet<String>,
    /// 当前嵌套深度（表达式与代码块）
    depth: usize,
    /// 最大嵌套深度
    max_depth: usize,
    /// Open `: NEWLINE INDENT` blocks around the current token
    block_depth: usize,
}

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            classes: IndexSet::new(),
            depth: 0,
            max_depth: MAX_NESTING_DEPTH,
            block_depth: 0,
        }
    }

    /// 设置最大嵌套深度
    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the current statement sits inside a block
    #[inline]
    pub fn in_block(&self) -> bool {
        self.block_depth > 0
    }

    /// 增加嵌套深度
    pub fn enter_nesting(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            Err(ParseError::NestingTooDeep {
                max_depth: self.max_depth,
                span: self.span(),
            })
        } else {
            Ok(())
        }
    }

    /// Run `f` one nesting level deeper; the depth is restored afterwards,
    /// including any levels `f` entered itself
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let depth = self.depth;
        let result = self.enter_nesting().and_then(|()| f(self));
        self.depth = depth;
        result
    }

    /// Run `f` as the body of a block
    pub fn in_block_body<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.block_depth += 1;
        let result = self.nested(f);
        self.block_depth -= 1;
        result
    }

    pub fn at_end(&self) -> bool {
        matches!(self.kind(), TokenKind::Eof)
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token, `Eof` past the end
    pub fn kind(&self) -> &'a TokenKind {
        self.current().map(|t| &t.kind).unwrap_or(&EOF)
    }

    pub fn peek_nth(
        &self,
        n: usize,
    ) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    pub fn span(&self) -> Span {
        self.current()
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or(Span::dummy())
    }

    /// Span of the most recently consumed token
    pub fn prev_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
            .unwrap_or_else(|| self.span())
    }

    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn at(
        &self,
        kind: &TokenKind,
    ) -> bool {
        self.kind() == kind
    }

    pub fn skip(
        &mut self,
        kind: &TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with "expected `what`"
    pub fn expect(
        &mut self,
        kind: &TokenKind,
        what: &str,
    ) -> ParseResult<&'a Token> {
        if self.at(kind) {
            if let Some(token) = self.bump() {
                return Ok(token);
            }
        }
        Err(self.expected(what))
    }

    /// Consume an identifier and return its name and span
    pub fn expect_identifier(
        &mut self,
        what: &str,
    ) -> ParseResult<(String, Span)> {
        if let TokenKind::Identifier(name) = self.kind() {
            let span = self.span();
            self.bump();
            Ok((name.clone(), span))
        } else {
            Err(self.expected(what))
        }
    }

    /// Error for the current token not being `what`
    pub fn expected(
        &self,
        what: &str,
    ) -> ParseError {
        ParseError::ExpectedToken {
            expected: what.to_string(),
            found: self.kind().clone(),
            span: self.span(),
        }
    }

    /// Error for the current token not being allowed here
    pub fn unexpected(&self) -> ParseError {
        match self.kind() {
            TokenKind::KwReserved(keyword) => ParseError::Unsupported {
                keyword: keyword.clone(),
                span: self.span(),
            },
            found => ParseError::UnexpectedToken {
                found: found.clone(),
                span: self.span(),
            },
        }
    }

    pub fn declare_class(
        &mut self,
        name: &str,
    ) {
        self.classes.insert(name.to_string());
    }

    pub fn is_class(
        &self,
        name: &str,
    ) -> bool {
        self.classes.contains(name)
    }

    /// Declared class names in declaration order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Register every `class Name` in the token stream before parsing,
    /// so instantiations may precede the class definition
    pub fn predeclare_classes(&mut self) {
        let tokens = self.tokens;
        for pair in tokens.windows(2) {
            if let (TokenKind::KwClass, TokenKind::Identifier(name)) = (&pair[0].kind, &pair[1].kind) {
                self.declare_class(name);
            }
        }
    }
}
