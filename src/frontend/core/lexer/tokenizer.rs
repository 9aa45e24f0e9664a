//! Tokenizer implementation
//! Main lexer structure and token generation logic, including the
//! NEWLINE/INDENT/DEDENT layout tokens

use super::indentation::IndentationTracker;
use super::literals::{is_digit, is_identifier_char, is_identifier_start, scan_number, scan_string};
use super::state::LexerState;
use crate::frontend::core::lexer::tokens::*;
use crate::util::span::{Position, Span};
use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::Chars;

/// Main lexer structure
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    start_offset: usize,
    start_line: usize,
    start_column: usize,
    state: LexerState,
    indents: IndentationTracker,
    /// Tokens already produced but not yet handed out (INDENT/DEDENT runs)
    pending: VecDeque<Token>,
    /// Next character begins a physical line whose indentation is unmeasured
    at_line_start: bool,
    /// A logical line has tokens and still needs its NEWLINE
    line_open: bool,
    /// Open `(`, `[` and `{`; line breaks inside them are ignored
    paren_depth: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self::with_state(source, LexerState::default())
    }

    /// Create a lexer with explicit settings
    pub fn with_state(
        source: &'a str,
        state: LexerState,
    ) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            start_offset: 0,
            start_line: 1,
            start_column: 1,
            state,
            indents: IndentationTracker::new(),
            pending: VecDeque::new(),
            at_line_start: true,
            line_open: false,
            paren_depth: 0,
            finished: false,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        Position::with_offset(self.start_line, self.start_column, self.start_offset)
    }

    /// Get span of current token
    pub fn span(&self) -> Span {
        Span::new(self.start_position(), self.position())
    }

    /// Source text of the current token
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start_offset..self.offset]
    }

    /// Advance to next character
    pub fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// Peek at next character
    pub fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Generate next token, `Ok(None)` once EOF has been produced
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.finished {
                return Ok(None);
            }

            if self.at_line_start && self.paren_depth == 0 {
                self.measure_line()?;
                continue;
            }

            self.skip_inline_whitespace();

            match self.peek().copied() {
                None => self.finish(),
                Some('#') => self.skip_comment(),
                Some('\n') => {
                    self.mark_start();
                    self.advance();
                    if self.paren_depth == 0 {
                        self.at_line_start = true;
                        self.line_open = false;
                        return Ok(Some(self.make_token(TokenKind::Newline)));
                    }
                }
                Some(_) => {
                    let token = self.scan_token()?;
                    self.line_open = true;
                    return Ok(Some(token));
                }
            }
        }
    }

    /// Measure the indentation of a physical line. Blank and comment-only
    /// lines are consumed whole and produce nothing.
    fn measure_line(&mut self) -> Result<(), LexError> {
        let tab_width = self.state.tab_width();
        let mut width = 0;
        while let Some(&c) = self.peek() {
            match c {
                ' ' => width += 1,
                '\t' => width += tab_width,
                '\r' => {}
                _ => break,
            }
            self.advance();
        }

        match self.peek().copied() {
            Some('\n') => {
                self.advance();
            }
            Some('#') => self.skip_comment(),
            None => self.at_line_start = false,
            Some(_) => {
                self.at_line_start = false;
                let at = self.position();
                let layout = self.indents.process(width, at)?;
                self.pending.extend(layout);
            }
        }
        Ok(())
    }

    /// Emit the trailing NEWLINE, DEDENTs and EOF
    fn finish(&mut self) {
        let at = self.position();
        if self.line_open {
            self.pending.push_back(Token::synthetic(TokenKind::Newline, at));
            self.line_open = false;
        }
        let dedents = self.indents.finalize(at);
        self.pending.extend(dedents);
        self.pending.push_back(Token::synthetic(TokenKind::Eof, at));
        self.finished = true;
    }

    fn skip_inline_whitespace(&mut self) {
        while let Some(&c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    /// Skip a comment up to, but not including, the line break
    fn skip_comment(&mut self) {
        while let Some(&c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn mark_start(&mut self) {
        self.start_offset = self.offset;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Scan one source token starting at the current character
    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.mark_start();
        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let kind = match c {
            c if is_identifier_start(c) => return Ok(self.scan_identifier()),
            c if is_digit(c) => return scan_number(self),
            '"' => return scan_string(self),
            '+' => self.with_eq(TokenKind::Plus, TokenKind::PlusEq),
            '-' => self.with_eq(TokenKind::Minus, TokenKind::MinusEq),
            '*' => {
                if self.peek() == Some(&'*') {
                    self.advance();
                    TokenKind::StarStar
                } else {
                    self.with_eq(TokenKind::Star, TokenKind::StarEq)
                }
            }
            '/' => {
                if self.peek() == Some(&'/') {
                    self.advance();
                    TokenKind::SlashSlash
                } else {
                    self.with_eq(TokenKind::Slash, TokenKind::SlashEq)
                }
            }
            '%' => TokenKind::Percent,
            '=' => self.with_eq(TokenKind::Eq, TokenKind::EqEq),
            '<' => self.with_eq(TokenKind::Lt, TokenKind::Le),
            '>' => self.with_eq(TokenKind::Gt, TokenKind::Ge),
            '!' => {
                if self.peek() == Some(&'=') {
                    self.advance();
                    TokenKind::Neq
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: '!',
                        position: self.start_position(),
                    });
                }
            }
            '(' | '[' | '{' => {
                self.paren_depth += 1;
                match c {
                    '(' => TokenKind::LParen,
                    '[' => TokenKind::LBracket,
                    _ => TokenKind::LBrace,
                }
            }
            ')' | ']' | '}' => {
                self.paren_depth = self.paren_depth.saturating_sub(1);
                match c {
                    ')' => TokenKind::RParen,
                    ']' => TokenKind::RBracket,
                    _ => TokenKind::RBrace,
                }
            }
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            c => {
                return Err(LexError::UnexpectedChar {
                    ch: c,
                    position: self.start_position(),
                })
            }
        };

        Ok(self.make_token(kind))
    }

    /// `single`, or `with_eq` when the next character is `=`
    fn with_eq(
        &mut self,
        single: TokenKind,
        with_eq: TokenKind,
    ) -> TokenKind {
        if self.peek() == Some(&'=') {
            self.advance();
            with_eq
        } else {
            single
        }
    }

    /// Scan identifier or keyword token
    fn scan_identifier(&mut self) -> Token {
        while let Some(&c) = self.peek() {
            if is_identifier_char(c) {
                self.advance();
            } else {
                break;
            }
        }

        let value = self.lexeme();
        let kind = self
            .state
            .keyword_from_str(value)
            .unwrap_or_else(|| TokenKind::Identifier(value.to_string()));
        self.make_token(kind)
    }

    /// Create token with current span and lexeme
    pub fn make_token(
        &self,
        kind: TokenKind,
    ) -> Token {
        Token {
            kind,
            lexeme: self.lexeme().to_string(),
            span: self.span(),
        }
    }
}
