//! 表达式解析测试 - 优先级、结合性与后缀形式

use super::{expr, parse_source, sexpr};
use crate::frontend::core::parser::ast::*;

#[cfg(test)]
mod expression_tests {
    use super::*;

    fn shape(source: &str) -> String {
        sexpr(&expr(source))
    }

    #[test]
    fn test_arithmetic_precedence() {
        assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(shape("(1 + 2) * 3"), "((1 + 2) * 3)");
        assert_eq!(shape("a - b - c"), "((a - b) - c)");
        assert_eq!(shape("a / b // c % d"), "(((a / b) // c) % d)");
    }

    #[test]
    fn test_power_binds_right_and_above_unary() {
        assert_eq!(shape("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
        assert_eq!(shape("-x ** 2"), "(-(x ** 2))");
        assert_eq!(shape("2 ** -1"), "(2 ** (-1))");
        assert_eq!(shape("a * b ** c"), "(a * (b ** c))");
    }

    #[test]
    fn test_unary_plus_is_identity() {
        assert_eq!(shape("+x"), "x");
        assert_eq!(shape("-+x"), "(-x)");
    }

    #[test]
    fn test_boolean_operators() {
        assert_eq!(shape("a or b and c"), "(a or (b and c))");
        assert_eq!(shape("not a == b"), "(not (a == b))");
        assert_eq!(shape("not a and b"), "((not a) and b)");
        assert_eq!(shape("a < b + 1 or c"), "((a < (b + 1)) or c)");
    }

    #[test]
    fn test_constants() {
        assert_eq!(shape("True"), "True");
        assert_eq!(shape("None"), "None");
        assert_eq!(shape("\"hi\\n\""), "\"hi\\n\"");
        assert_eq!(shape("1.5"), "1.5");
    }

    #[test]
    fn test_calls_and_attributes() {
        assert_eq!(shape("print(\"Hello,\", name)"), "print(\"Hello,\", name)");
        assert_eq!(shape("f()"), "f()");
        assert_eq!(shape("f(a, b,)"), "f(a, b)");
        assert_eq!(shape("self.name"), "self.name");
        assert_eq!(shape("person.greet()"), "person.greet()");
        assert_eq!(shape("a.b.c(1).d"), "a.b.c(1).d");
        assert_eq!(shape("f(x)(y)"), "f(x)(y)");
        assert_eq!(shape("-f(x)"), "(-f(x))");
    }

    #[test]
    fn test_call_arguments_span_lines() {
        assert_eq!(shape("f(1,\n  2)"), "f(1, 2)");
    }

    #[test]
    fn test_unknown_name_call_is_plain_call() {
        match expr("Person(\"Alice\", 30)") {
            Expr::Call { callee, args, .. } => {
                assert!(matches!(*callee, Expr::Name(ref n, _) if n == "Person"));
                assert_eq!(args.len(), 2);
            }
            other => panic!("Expected Call, got {:?}", other),
        }
    }

    #[test]
    fn test_known_class_call_is_new() {
        let module = parse_source(
            "class Person:\n    def __init__(self, name):\n        self.name = name\np = Person(\"Alice\")\n",
        );
        match &module.body[1].kind {
            StmtKind::Assign { value, .. } => {
                assert_eq!(sexpr(value), "new Person(\"Alice\")");
            }
            other => panic!("Expected Assign, got {:?}", other),
        }
    }

    #[test]
    fn test_binop_span_covers_operands() {
        let e = expr("a + bcd");
        let span = e.span();
        assert_eq!(span.start.column, 1);
        assert_eq!(span.end.column, 8);
    }
}
