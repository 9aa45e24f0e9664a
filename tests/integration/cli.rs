//! Command-line behavior

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pytac(
    home: &TempDir,
    args: &[&str],
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pytac"))
        .args(args)
        .env("XDG_CONFIG_HOME", home.path())
        .output()
        .expect("failed to run pytac")
}

fn write_source(
    dir: &TempDir,
    name: &str,
    source: &str,
) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, source).unwrap();
    path.to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_show_prints_tree() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "a.py", "x = 1\n");
    let output = pytac(&dir, &["show", &file]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Assign\n  target: Name(x)\n  value: Constant(1)\n");
}

#[test]
fn test_show_ir_flag_appends_listing() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "a.py", "def f():\n    return 1\n");
    let output = pytac(&dir, &["show", "--show-ir", &file]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("function f():\n    return 1\n"));
    assert!(text.ends_with("toplevel:\n"));
}

#[test]
fn test_show_renders_diagnostic_on_error() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "bad.py", "x = 1\nif x:\n    y = 1 +\n");
    let output = pytac(&dir, &["--no-color", "show", &file]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("error[E1001]"), "{}", err);
    assert!(err.contains("bad.py:3:"), "{}", err);
    assert!(err.contains("SyntaxError"), "{}", err);
}

#[test]
fn test_json_success_and_failure() {
    let dir = TempDir::new().unwrap();
    let good = write_source(&dir, "good.py", "print(\"hi\")\n");
    let output = pytac(&dir, &["json", &good]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["ir"]["toplevel"][0], "t1 = call print(\"hi\")");

    let bad = write_source(&dir, "bad.py", "return 1\n");
    let output = pytac(&dir, &["json", &bad]);
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["kind"], "LoweringError");
}

#[test]
fn test_tokens_lists_layout() {
    let dir = TempDir::new().unwrap();
    let file = write_source(&dir, "a.py", "if x:\n    pass\n");
    let output = pytac(&dir, &["tokens", &file]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("indent"));
    assert!(text.contains("dedent"));
    assert!(text.trim_end().ends_with("end of input"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.py");
    let output = pytac(&dir, &["show", &missing.to_string_lossy()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read file"));
}

#[test]
fn test_user_config_enables_ir() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("pytac");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[compile]\nshow_ir = true\n").unwrap();

    let file = write_source(&dir, "a.py", "f()\n");
    let output = pytac(&dir, &["show", &file]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("t1 = call f()"));
}

#[test]
fn test_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_source(&dir, "custom.toml", "[compile]\npredeclare_classes = true\nshow_ir = true\n");
    let file = write_source(&dir, "a.py", "p = P()\nclass P:\n    def go(self):\n        pass\n");
    let output = pytac(&dir, &["--config", &config, "show", &file]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("t1 = new P()"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let output = pytac(&dir, &["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("pytac {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_demo_runs_through_cli() {
    let dir = TempDir::new().unwrap();
    let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("benches/py_samples/example.py");
    let output = pytac(&dir, &["show", "--show-ir", &demo.to_string_lossy()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("function Person.birthday(self):"));
}
