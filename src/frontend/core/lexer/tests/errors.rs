//! 错误处理测试

use crate::frontend::core::lexer::{tokenize, LexError};

#[cfg(test)]
mod lexer_error_tests {
    use super::*;

    #[test]
    fn test_unterminated_string() {
        match tokenize("x = \"hello") {
            Err(LexError::UnterminatedString { position }) => {
                assert_eq!((position.line, position.column), (1, 5));
            }
            other => panic!("Expected unterminated string error, got {:?}", other),
        }
    }

    #[test]
    fn test_string_cannot_span_lines() {
        assert!(matches!(
            tokenize("\"abc\ndef\""),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_invalid_escape() {
        match tokenize(r#""\q""#) {
            Err(LexError::InvalidEscape { sequence, position }) => {
                assert_eq!(sequence, 'q');
                assert_eq!(position.column, 2);
            }
            other => panic!("Expected invalid escape error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_char() {
        for (source, ch) in [("@", '@'), ("a $ b", '$'), ("'single'", '\''), ("a; b", ';')] {
            match tokenize(source) {
                Err(LexError::UnexpectedChar { ch: found, .. }) => assert_eq!(found, ch),
                other => panic!("Expected unexpected char for {:?}, got {:?}", source, other),
            }
        }
    }

    #[test]
    fn test_lone_bang_is_error() {
        assert!(matches!(
            tokenize("!x"),
            Err(LexError::UnexpectedChar { ch: '!', .. })
        ));
    }

    #[test]
    fn test_error_position_on_later_line() {
        let err = tokenize("x = 1\ny = ?\n").unwrap_err();
        assert_eq!(err.position().line, 2);
        assert_eq!(err.position().column, 5);
        assert_eq!(err.to_string(), "unexpected character '?' at 2:5");
    }
}
