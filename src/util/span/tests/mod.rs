//! Span 单元测试
//!
//! 测试源位置跟踪的 Position、Span 和 SourceFile

use crate::util::span::{Position, SourceFile, Span};

#[test]
fn test_position_display() {
    let pos = Position::new(10, 20);
    assert_eq!(format!("{}", pos), "10:20");
}

#[test]
fn test_span_to_joins_outer_bounds() {
    let a = Span::new(Position::with_offset(1, 1, 0), Position::with_offset(1, 4, 3));
    let b = Span::new(Position::with_offset(2, 5, 10), Position::with_offset(2, 9, 14));
    let joined = a.to(b);
    assert_eq!(joined.start, a.start);
    assert_eq!(joined.end, b.end);
    assert_eq!(joined.len(), 14);
}

#[test]
fn test_span_dummy() {
    assert!(Span::dummy().is_dummy());
    assert!(!Span::point(Position::new(1, 1)).is_dummy());
}

#[test]
fn test_source_file_position_from_offset_multiline() {
    let file = SourceFile::new("test.py", "ab\ncd\nef");
    assert_eq!(file.position_from_offset(0), Position::with_offset(1, 1, 0));
    assert_eq!(file.position_from_offset(4), Position::with_offset(2, 2, 4));
    assert_eq!(file.position_from_offset(6), Position::with_offset(3, 1, 6));
}

#[test]
fn test_source_file_line_text() {
    let file = SourceFile::new("test.py", "def f():\r\n    return 1\n");
    assert_eq!(file.line_count(), 2);
    assert_eq!(file.line_text(1), Some("def f():"));
    assert_eq!(file.line_text(2), Some("    return 1"));
    assert_eq!(file.line_text(3), None);
    assert_eq!(file.line_text(0), None);
}
