//! Indentation tracking for indentation-based block structure.

use super::tokens::{LexError, Token, TokenKind};
use crate::util::span::Position;

/// Tracks the widths of the currently open blocks.
pub struct IndentationTracker {
    /// Stack of indentation widths, bottom is always 0
    stack: Vec<usize>,
}

impl IndentationTracker {
    /// Create a new tracker starting at width 0.
    pub fn new() -> Self {
        IndentationTracker { stack: vec![0] }
    }

    /// Number of open blocks.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Compare the width of a new logical line with the open blocks and
    /// produce the INDENT/DEDENT tokens that reconcile them.
    pub fn process(
        &mut self,
        width: usize,
        at: Position,
    ) -> Result<Vec<Token>, LexError> {
        let current = *self.stack.last().unwrap_or(&0);
        let mut tokens = Vec::new();

        if width > current {
            self.stack.push(width);
            tokens.push(Token::synthetic(TokenKind::Indent, at));
        } else if width < current {
            while let Some(&level) = self.stack.last() {
                if level <= width {
                    break;
                }
                self.stack.pop();
                tokens.push(Token::synthetic(TokenKind::Dedent, at));
            }

            if self.stack.last() != Some(&width) {
                return Err(LexError::InconsistentDedent { width, position: at });
            }
        }

        Ok(tokens)
    }

    /// Close every open block at end of input.
    pub fn finalize(
        &mut self,
        at: Position,
    ) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.depth());
        while self.stack.len() > 1 {
            self.stack.pop();
            tokens.push(Token::synthetic(TokenKind::Dedent, at));
        }
        tokens
    }
}

impl Default for IndentationTracker {
    fn default() -> Self {
        Self::new()
    }
}
