//! Lexer module
//! Turns source text into tokens, including NEWLINE/INDENT/DEDENT layout tokens

pub mod indentation;
pub mod literals;
pub mod state;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use state::LexerState;
pub use tokenizer::Lexer;
pub use tokens::{LexError, Literal, Token, TokenKind};

/// Indentation width of a tab character
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Tokenize source code with the default tab width.
///
/// The result always ends with `Eof`, preceded by the DEDENTs that close every
/// open block.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, DEFAULT_TAB_WIDTH)
}

/// Tokenize source code, counting a tab as `tab_width` columns of indentation
pub fn tokenize_with(
    source: &str,
    tab_width: usize,
) -> Result<Vec<Token>, LexError> {
    tracing::debug!("lexing {} bytes", source.len());

    let mut lexer = Lexer::with_state(source, LexerState::new(tab_width));
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        log_token(&token);
        tokens.push(token);
    }

    tracing::debug!("lexing complete: {} tokens", tokens.len());
    Ok(tokens)
}

/// Log a token for debugging
fn log_token(token: &Token) {
    let category = match &token.kind {
        TokenKind::Identifier(_) => "identifier",
        TokenKind::KwDef
        | TokenKind::KwClass
        | TokenKind::KwIf
        | TokenKind::KwElif
        | TokenKind::KwElse
        | TokenKind::KwWhile
        | TokenKind::KwReturn
        | TokenKind::KwPass
        | TokenKind::KwBreak
        | TokenKind::KwContinue
        | TokenKind::KwAnd
        | TokenKind::KwOr
        | TokenKind::KwNot
        | TokenKind::KwReserved(_) => "keyword",
        TokenKind::IntLiteral(_)
        | TokenKind::FloatLiteral(_)
        | TokenKind::StringLiteral(_)
        | TokenKind::BoolLiteral(_)
        | TokenKind::NoneLiteral => "literal",
        kind if kind.is_layout() => "layout",
        _ => "punctuation",
    };
    tracing::trace!(
        "{} {:?} at {}",
        category,
        token.kind,
        token.span.start
    );
}
