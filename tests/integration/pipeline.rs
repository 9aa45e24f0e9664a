//! End-to-end lowering through the public API

use pytac::frontend::core::parser::tree;
use pytac::{analyze, analyze_file, analyze_with, CompileConfig, ErrorKind};
use std::io::Write;

const EXAMPLE: &str = r#"def hello(name):
    print("Hello,", name)
    return name

class Person:
    def __init__(self, name, age):
        self.name = name
        self.age = age

    def greet(self):
        return hello(self.name)

person = Person("Alice", 30)
result = person.greet()
"#;

#[test]
fn test_example_program_listing() {
    let analysis = analyze(EXAMPLE).unwrap();
    let expected = "\
function hello(name):
    t1 = call print(\"Hello,\", name)
    return name

function Person.__init__(self, name, age):
    store name -> self.name
    store age -> self.age
    return

function Person.greet(self):
    t1 = call hello(self.name)
    return t1

toplevel:
    t1 = new Person(\"Alice\", 30)
    store t1 -> person
    t2 = call person.greet()
    store t2 -> result
";
    assert_eq!(analysis.ir.to_string(), expected);
}

#[test]
fn test_example_program_tree() {
    let analysis = analyze(EXAMPLE).unwrap();
    let lines = tree::dump_lines(&analysis.ast);
    assert_eq!(lines[0], "FunctionDef(hello)");
    assert_eq!(lines[1], "  param: Param(name)");
    assert!(lines.contains(&"ClassDef(Person)".to_string()));
    assert!(lines.contains(&"  method: FunctionDef(__init__)".to_string()));
    assert!(lines.contains(&"  value: New(Person)".to_string()));

    let root = tree::to_tree(&analysis.ast);
    assert_eq!(root.size(), lines.len() + 1);
}

#[test]
fn test_demo_file_compiles() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("benches/py_samples/example.py");
    let analysis = analyze_file(&path).unwrap();
    assert!(analysis.ir.function("Person.birthday").is_some());
    assert!(analysis
        .ir
        .toplevel_lines()
        .iter()
        .any(|line| line == "t6 = call person.birthday()"));
}

#[test]
fn test_analyze_file_reports_missing_file() {
    let err = analyze_file(std::path::Path::new("does/not/exist.py")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read file"));
}

#[test]
fn test_analyze_file_wraps_compile_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "def f(a, a):\n    pass\n").unwrap();
    let err = analyze_file(file.path()).unwrap_err();
    let compile = err.downcast_ref::<pytac::CompileError>().unwrap();
    assert_eq!(compile.kind(), ErrorKind::SyntaxError);
    assert_eq!(compile.code().code, "E1004");
}

#[test]
fn test_each_stage_reports_its_kind() {
    assert_eq!(analyze("x = 1 @ 2\n").unwrap_err().kind(), ErrorKind::LexicalError);
    assert_eq!(analyze("x = = 2\n").unwrap_err().kind(), ErrorKind::SyntaxError);
    assert_eq!(analyze("if x:\nbreak\n").unwrap_err().kind(), ErrorKind::SyntaxError);
    assert_eq!(analyze("pass\nbreak\n").unwrap_err().kind(), ErrorKind::LoweringError);
}

#[test]
fn test_deep_nesting_is_reported_on_small_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let source = format!("x = {}1{}\n", "(".repeat(10_000), ")".repeat(10_000));
            analyze(&source).map(|_| ()).map_err(|e| (e.kind(), e.code().code))
        })
        .unwrap();
    assert_eq!(
        handle.join().unwrap(),
        Err((ErrorKind::SyntaxError, "E1007"))
    );
}

#[test]
fn test_nested_definition_never_reaches_lowering() {
    for source in [
        "def outer():\n    def inner():\n        return 1\n    return inner()\n",
        "if flag:\n    def f():\n        pass\n",
    ] {
        assert_eq!(analyze(source).unwrap_err().kind(), ErrorKind::SyntaxError);
    }
}

#[test]
fn test_config_changes_behavior() {
    let source = "p = P()\nclass P:\n    def go(self):\n        pass\n";
    let config = CompileConfig::new().with_predeclare_classes(true);
    let analysis = analyze_with(source, config).unwrap();
    assert_eq!(analysis.ir.toplevel_lines(), vec!["t1 = new P()", "store t1 -> p"]);
}

#[test]
fn test_empty_source() {
    let analysis = analyze("").unwrap();
    assert!(analysis.ast.body.is_empty());
    assert!(analysis.ir.functions.is_empty());
    assert!(analysis.ir.toplevel.is_empty());
}

#[test]
fn test_comments_and_blank_lines_only() {
    let analysis = analyze("# nothing here\n\n   \n# still nothing\n").unwrap();
    assert!(analysis.ast.body.is_empty());
}
