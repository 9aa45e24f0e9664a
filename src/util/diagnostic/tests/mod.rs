//! 诊断渲染测试

use crate::util::diagnostic::{Diagnostic, EmitterConfig, ErrorCode, JsonEmitter, TextEmitter};
use crate::util::span::{Position, SourceFile, Span};

fn plain() -> TextEmitter {
    TextEmitter::with_config(EmitterConfig {
        use_colors: false,
        ..Default::default()
    })
}

fn span(
    line: usize,
    start: usize,
    end: usize,
) -> Span {
    Span::new(Position::new(line, start), Position::new(line, end))
}

#[test]
fn test_render_header_and_location() {
    let file = SourceFile::new("demo.py", "x = 1\ny = $\n");
    let diagnostic = Diagnostic::error("E0001", "unexpected character '$' at 2:5").at(span(2, 5, 6));

    let output = plain().render_with_source(&diagnostic, Some(&file));
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "error[E0001]: unexpected character '$' at 2:5");
    assert_eq!(lines[1], " --> demo.py:2:5");
    assert_eq!(lines[3], "   2 | y = $");
    assert_eq!(lines[4], "     |     ^");
}

#[test]
fn test_render_without_source() {
    let diagnostic = Diagnostic::error("E2001", "`break` outside loop").at(span(3, 5, 10));
    let output = plain().render(&diagnostic);
    assert!(output.contains(" --> <unknown>:3:5"), "{}", output);
    assert!(!output.contains(" | "));
}

#[test]
fn test_render_help() {
    let diagnostic = Diagnostic::error("E1002", "empty block").with_help("use `pass`");
    let output = plain().render(&diagnostic);
    assert!(output.ends_with("help: use `pass`\n"), "{}", output);
}

#[test]
fn test_colors_disabled() {
    let diagnostic = Diagnostic::error("E0001", "bad");
    assert!(!plain().render(&diagnostic).contains("\x1b["));
    assert!(TextEmitter::new().render(&diagnostic).contains("\x1b[31m"));
}

#[test]
fn test_display() {
    let diagnostic = Diagnostic::warning("E1001", "careful");
    assert_eq!(diagnostic.to_string(), "warning[E1001]: careful");
}

#[test]
fn test_error_code_registry() {
    let entry = ErrorCode::find("E0005").unwrap();
    assert_eq!(entry.title, "inconsistent dedent");
    assert!(ErrorCode::find("E9999").is_none());

    let mut codes: Vec<_> = ErrorCode::ALL.iter().map(|c| c.code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), ErrorCode::ALL.len());
}

#[test]
fn test_json_report() {
    let diagnostic = Diagnostic::error("E1001", "expected ':'").at(span(4, 9, 10));
    let json = JsonEmitter::new().render(&diagnostic, "SyntaxError").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["success"], false);
    assert_eq!(value["error"], "expected ':'");
    assert_eq!(value["kind"], "SyntaxError");
    assert_eq!(value["line"], 4);
    assert_eq!(value["column"], 9);
}

#[test]
fn test_json_report_without_span() {
    let report = JsonEmitter::new().report(&Diagnostic::error("E2004", "nope"), "LoweringError");
    assert_eq!(report.line, None);
    assert_eq!(report.column, None);
}
