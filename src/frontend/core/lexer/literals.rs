//! Literal scanning implementations
//! Handles number and string literals

use super::tokenizer::Lexer;
use crate::frontend::core::lexer::tokens::*;

/// Scan a decimal number literal. The first digit has already been consumed.
///
/// Accepts `digits` or `digits.digits?`; a second `.` or a letter glued to
/// the digits makes the whole run malformed.
pub fn scan_number(lexer: &mut Lexer<'_>) -> Result<Token, LexError> {
    let mut is_float = false;

    while let Some(&c) = lexer.peek() {
        if is_digit(c) {
            lexer.advance();
        } else if c == '.' && !is_float {
            is_float = true;
            lexer.advance();
        } else {
            break;
        }
    }

    let malformed = matches!(lexer.peek(), Some(&c) if c == '.' || is_identifier_char(c));
    if malformed {
        while let Some(&c) = lexer.peek() {
            if c == '.' || is_identifier_char(c) {
                lexer.advance();
            } else {
                break;
            }
        }
        return Err(invalid_number(lexer));
    }

    let text = lexer.lexeme();
    let kind = if is_float {
        match text.parse::<f64>() {
            Ok(value) => TokenKind::FloatLiteral(value),
            Err(_) => return Err(invalid_number(lexer)),
        }
    } else {
        match text.parse::<i64>() {
            Ok(value) => TokenKind::IntLiteral(value),
            Err(_) => return Err(invalid_number(lexer)),
        }
    };

    Ok(lexer.make_token(kind))
}

fn invalid_number(lexer: &Lexer<'_>) -> LexError {
    LexError::InvalidNumber {
        literal: lexer.lexeme().to_string(),
        position: lexer.start_position(),
    }
}

/// Scan a double-quoted string literal. The opening quote has already been consumed.
pub fn scan_string(lexer: &mut Lexer<'_>) -> Result<Token, LexError> {
    let mut value = String::new();
    let start = lexer.start_position();

    loop {
        match lexer.peek().copied() {
            None | Some('\n') => return Err(LexError::UnterminatedString { position: start }),
            Some('"') => {
                lexer.advance();
                break;
            }
            Some('\\') => {
                let escape_at = lexer.position();
                lexer.advance();
                match lexer.peek().copied() {
                    None | Some('\n') => return Err(LexError::UnterminatedString { position: start }),
                    Some(c) => {
                        let unescaped = match c {
                            '"' => '"',
                            '\\' => '\\',
                            'n' => '\n',
                            't' => '\t',
                            'r' => '\r',
                            other => {
                                return Err(LexError::InvalidEscape {
                                    sequence: other,
                                    position: escape_at,
                                })
                            }
                        };
                        lexer.advance();
                        value.push(unescaped);
                    }
                }
            }
            Some(c) => {
                lexer.advance();
                value.push(c);
            }
        }
    }

    Ok(lexer.make_token(TokenKind::StringLiteral(value)))
}

/// Check if character can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if character can be part of an identifier
pub fn is_identifier_char(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if character is an ASCII digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
