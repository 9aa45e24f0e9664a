//! Lexer state management
//! Handles keyword recognition

use crate::frontend::core::lexer::tokens::TokenKind;

/// Words of the full source language that the subset does not implement.
/// They still lex as keywords so that `for = 1` is rejected instead of
/// silently becoming a variable.
const RESERVED_WORDS: &[&str] = &[
    "as", "assert", "async", "await", "del", "except", "finally", "for", "from", "global",
    "import", "in", "is", "lambda", "nonlocal", "raise", "try", "with", "yield",
];

/// Lexer state management
pub struct LexerState {
    /// Width a tab contributes to indentation
    tab_width: usize,
}

impl LexerState {
    /// Create new lexer state
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    #[inline]
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Convert string to keyword token
    pub fn keyword_from_str(
        &self,
        s: &str,
    ) -> Option<TokenKind> {
        match s {
            // Declarations
            "def" => Some(TokenKind::KwDef),
            "class" => Some(TokenKind::KwClass),

            // Control flow keywords
            "if" => Some(TokenKind::KwIf),
            "elif" => Some(TokenKind::KwElif),
            "else" => Some(TokenKind::KwElse),
            "while" => Some(TokenKind::KwWhile),
            "return" => Some(TokenKind::KwReturn),
            "pass" => Some(TokenKind::KwPass),
            "break" => Some(TokenKind::KwBreak),
            "continue" => Some(TokenKind::KwContinue),

            // Logical operators
            "and" => Some(TokenKind::KwAnd),
            "or" => Some(TokenKind::KwOr),
            "not" => Some(TokenKind::KwNot),

            // Constants
            "True" => Some(TokenKind::BoolLiteral(true)),
            "False" => Some(TokenKind::BoolLiteral(false)),
            "None" => Some(TokenKind::NoneLiteral),

            s if RESERVED_WORDS.contains(&s) => Some(TokenKind::KwReserved(s.to_string())),
            _ => None,
        }
    }
}

impl Default for LexerState {
    fn default() -> Self {
        Self::new(crate::frontend::core::lexer::DEFAULT_TAB_WIDTH)
    }
}
