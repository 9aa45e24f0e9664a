//! 错误码注册表
//!
//! - E0xxx: 词法错误
//! - E1xxx: 语法错误
//! - E2xxx: IR 降级错误

/// 已注册的错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    pub code: &'static str,
    pub title: &'static str,
    pub help: &'static str,
}

macro_rules! error_codes {
    ($($name:ident = $code:literal, $title:literal, $help:literal;)*) => {
        impl ErrorCode {
            $(
                pub const $name: ErrorCode = ErrorCode {
                    code: $code,
                    title: $title,
                    help: $help,
                };
            )*

            /// 全部错误码
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name),*];
        }
    };
}

error_codes! {
    UNEXPECTED_CHARACTER = "E0001", "unexpected character",
        "remove the character; only double-quoted strings and ASCII operators are supported";
    UNTERMINATED_STRING = "E0002", "unterminated string literal",
        "close the string with `\"` on the same line";
    INVALID_ESCAPE = "E0003", "invalid escape sequence",
        "supported escapes are \\\", \\\\, \\n, \\t and \\r";
    MALFORMED_NUMBER = "E0004", "malformed number literal",
        "numbers are decimal digits with at most one `.`";
    INCONSISTENT_DEDENT = "E0005", "inconsistent dedent",
        "dedent to the indentation of an enclosing block";
    UNEXPECTED_TOKEN = "E1001", "unexpected token", "";
    EMPTY_BLOCK = "E1002", "empty block",
        "use `pass` for a block with no statements";
    INVALID_ASSIGN_TARGET = "E1003", "invalid assignment target",
        "only names and attributes can be assigned to";
    DUPLICATE_PARAMETER = "E1004", "duplicate parameter", "";
    UNSUPPORTED_SYNTAX = "E1005", "unsupported syntax",
        "this keyword is reserved but not part of the supported subset";
    NESTED_DEFINITION = "E1006", "nested definition",
        "move the `def` or `class` to module level";
    NESTING_TOO_DEEP = "E1007", "nesting too deep",
        "split the expression or block into smaller parts";
    BREAK_OUTSIDE_LOOP = "E2001", "`break` outside loop", "";
    CONTINUE_OUTSIDE_LOOP = "E2002", "`continue` outside loop", "";
    RETURN_OUTSIDE_FUNCTION = "E2003", "`return` outside function", "";
    UNSUPPORTED_CONSTRUCT = "E2004", "construct cannot be lowered", "";
}

impl ErrorCode {
    /// 按错误码查找
    pub fn find(code: &str) -> Option<&'static ErrorCode> {
        Self::ALL.iter().find(|entry| entry.code == code)
    }
}
