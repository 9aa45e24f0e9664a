//! Token types

use crate::util::span::{Position, Span};
use std::fmt;

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },
    #[error("unterminated string starting at {position}")]
    UnterminatedString { position: Position },
    #[error("invalid escape sequence '\\{sequence}' at {position}")]
    InvalidEscape { sequence: char, position: Position },
    #[error("malformed number literal '{literal}' at {position}")]
    InvalidNumber { literal: String, position: Position },
    #[error(
        "unindent to width {width} does not match any outer indentation level on line {}",
        .position.line
    )]
    InconsistentDedent { width: usize, position: Position },
}

impl LexError {
    /// Where the offending input starts
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::InvalidEscape { position, .. }
            | LexError::InvalidNumber { position, .. }
            | LexError::InconsistentDedent { position, .. } => *position,
        }
    }
}

/// Token kind
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    KwDef,
    KwClass,
    KwIf,
    KwElif,
    KwElse,
    KwWhile,
    KwReturn,
    KwPass,
    KwBreak,
    KwContinue,
    KwAnd,
    KwOr,
    KwNot,
    /// Keywords of the full language that this subset rejects (`for`, `import`, ...)
    KwReserved(String),

    // Identifiers
    Identifier(String),

    // Literals
    IntLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    BoolLiteral(bool),
    NoneLiteral,

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    Percent,
    Eq,
    EqEq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Dot,

    // Layout
    Newline,
    Indent,
    Dedent,
    Eof,
}

impl TokenKind {
    /// Layout tokens are synthesized by the lexer rather than read from source
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof
        )
    }

    /// Fixed source spelling for keywords, operators and delimiters
    pub fn symbol(&self) -> Option<&'static str> {
        let s = match self {
            TokenKind::KwDef => "def",
            TokenKind::KwClass => "class",
            TokenKind::KwIf => "if",
            TokenKind::KwElif => "elif",
            TokenKind::KwElse => "else",
            TokenKind::KwWhile => "while",
            TokenKind::KwReturn => "return",
            TokenKind::KwPass => "pass",
            TokenKind::KwBreak => "break",
            TokenKind::KwContinue => "continue",
            TokenKind::KwAnd => "and",
            TokenKind::KwOr => "or",
            TokenKind::KwNot => "not",
            TokenKind::NoneLiteral => "None",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::StarStar => "**",
            TokenKind::Slash => "/",
            TokenKind::SlashSlash => "//",
            TokenKind::Percent => "%",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Neq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            _ => return None,
        };
        Some(s)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if let Some(symbol) = self.symbol() {
            return write!(f, "'{}'", symbol);
        }
        match self {
            TokenKind::KwReserved(word) => write!(f, "keyword '{}'", word),
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::IntLiteral(n) => write!(f, "integer {}", n),
            TokenKind::FloatLiteral(x) => write!(f, "float {:?}", x),
            TokenKind::StringLiteral(_) => write!(f, "string literal"),
            TokenKind::BoolLiteral(b) => write!(f, "'{}'", if *b { "True" } else { "False" }),
            TokenKind::Newline => write!(f, "end of line"),
            TokenKind::Indent => write!(f, "indent"),
            TokenKind::Dedent => write!(f, "dedent"),
            TokenKind::Eof => write!(f, "end of input"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text (empty for synthesized layout tokens)
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Layout token with no source text
    pub fn synthetic(
        kind: TokenKind,
        at: Position,
    ) -> Self {
        Token {
            kind,
            lexeme: String::new(),
            span: Span::point(at),
        }
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

/// Literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    None,
}

impl fmt::Display for Literal {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::Bool(true) => write!(f, "True"),
            Literal::Bool(false) => write!(f, "False"),
            Literal::String(s) => write_quoted(f, s),
            Literal::None => write!(f, "None"),
        }
    }
}

/// Write a string back in source form, re-escaping what the lexer unescaped
pub(crate) fn write_quoted(
    f: &mut fmt::Formatter<'_>,
    s: &str,
) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}
