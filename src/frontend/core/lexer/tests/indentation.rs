//! 缩进测试 - INDENT/DEDENT 布局记号

use super::{ident, kinds};
use crate::frontend::core::lexer::{tokenize, tokenize_with, LexError, TokenKind};
use proptest::prelude::*;

#[cfg(test)]
mod lexer_indentation_tests {
    use super::*;

    #[test]
    fn test_function_block() {
        assert_eq!(
            kinds("def f():\n    return 1\n"),
            vec![
                TokenKind::KwDef,
                ident("f"),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::KwReturn,
                TokenKind::IntLiteral(1),
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_multiple_dedents_in_one_step() {
        let source = "if a:\n    if b:\n        x\ny\n";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::KwIf,
                ident("a"),
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::KwIf,
                ident("b"),
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                ident("x"),
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Dedent,
                ident("y"),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_eof_closes_open_blocks() {
        let tokens = kinds("while a:\n  while b:\n    pass");
        let tail = &tokens[tokens.len() - 4..];
        assert_eq!(
            tail,
            &[
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Dedent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_do_not_affect_indentation() {
        let source = "def f():\n    a\n\n# top-level comment\n        # deep comment\n    b\n";
        let tokens = kinds(source);
        assert_eq!(
            tokens.iter().filter(|k| **k == TokenKind::Indent).count(),
            1
        );
        assert_eq!(
            tokens.iter().filter(|k| **k == TokenKind::Dedent).count(),
            1
        );
    }

    #[test]
    fn test_tab_counts_as_tab_width() {
        // 一个制表符与四个空格等宽
        let tokens = kinds("if a:\n\tb\n    c\n");
        assert_eq!(
            tokens.iter().filter(|k| **k == TokenKind::Indent).count(),
            1
        );

        // 制表符宽度为 2 时，四个空格是更深一层
        let tokens: Vec<_> = tokenize_with("if a:\n\tb\n    c\n", 2)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            tokens.iter().filter(|k| **k == TokenKind::Indent).count(),
            2
        );
    }

    #[test]
    fn test_inconsistent_dedent() {
        let err = tokenize("if a:\n    b\n  c\n").unwrap_err();
        match err {
            LexError::InconsistentDedent { width, position } => {
                assert_eq!(width, 2);
                assert_eq!(position.line, 3);
            }
            other => panic!("Expected inconsistent dedent, got {:?}", other),
        }
        assert!(err_message("if a:\n    b\n  c\n").contains("line 3"));
    }

    #[test]
    fn test_indentation_inside_brackets_is_ignored() {
        let tokens = kinds("x = f(1,\n        2)\ny\n");
        assert!(!tokens.contains(&TokenKind::Indent));
    }

    fn err_message(source: &str) -> String {
        tokenize(source).unwrap_err().to_string()
    }
}

/// Lines at the given nesting depths, each one deeper or shallower than the previous
fn depth_sequence() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..4, 1..24).prop_map(|steps| {
        let mut depths = Vec::with_capacity(steps.len());
        let mut depth = 0usize;
        for step in steps {
            depth = match step {
                0 => depth + 1,
                1 => depth,
                _ => depth.saturating_sub(step - 1),
            };
            depths.push(depth);
        }
        // 每一层的第一行只能比上一行深一级
        let mut previous = 0;
        for depth in depths.iter_mut() {
            *depth = (*depth).min(previous + 1);
            previous = *depth;
        }
        depths
    })
}

proptest! {
    #[test]
    fn prop_layout_tokens_reconstruct_depth(depths in depth_sequence()) {
        let source: String = depths
            .iter()
            .map(|d| format!("{}x\n", "    ".repeat(*d)))
            .collect();
        let tokens = tokenize(&source).unwrap();

        let mut depth: isize = 0;
        let mut seen = Vec::new();
        for token in &tokens {
            match token.kind {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => depth -= 1,
                TokenKind::Identifier(_) => seen.push(depth as usize),
                _ => {}
            }
            prop_assert!(depth >= 0);
        }
        prop_assert_eq!(depth, 0);
        prop_assert_eq!(seen, depths);
    }
}
