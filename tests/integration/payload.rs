//! Service payload contract

use pytac::{analyze, AnalysisPayload};
use serde_json::Value;

fn payload(source: &str) -> Value {
    let result = analyze(source);
    serde_json::to_value(AnalysisPayload::from_result(&result)).unwrap()
}

#[test]
fn test_success_payload_keys() {
    let json = payload("x = f(1)\n");
    let object = json.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["ast_text", "ast_tree", "ir", "success"]);
    assert_eq!(json["ir"]["toplevel"][0], "t1 = call f(1)");
    assert_eq!(json["ir"]["toplevel"][1], "store t1 -> x");
}

#[test]
fn test_tree_ids_are_preorder() {
    let json = payload("x = a + b\n");
    let assign = &json["ast_tree"]["children"][0];
    assert_eq!(assign["id"], 1);
    assert_eq!(assign["kind"], "Assign");
    assert_eq!(assign["children"][0]["id"], 2);
    assert_eq!(assign["children"][0]["role"], "target");
    assert_eq!(assign["children"][1]["id"], 3);
    assert_eq!(assign["children"][1]["value"], "+");
    assert_eq!(assign["children"][1]["children"][1]["id"], 5);
}

#[test]
fn test_root_has_no_role_or_value() {
    let json = payload("pass\n");
    assert!(json["ast_tree"].get("role").is_none());
    assert!(json["ast_tree"].get("value").is_none());
}

#[test]
fn test_failure_payload_keys() {
    let json = payload("s = \"unterminated\n");
    assert_eq!(json["success"], false);
    assert_eq!(json["kind"], "LexicalError");
    assert_eq!(json["code"], "E0002");
    assert_eq!(json["line"], 1);
    assert_eq!(json["column"], 5);
    assert!(json["error"].as_str().unwrap().contains("unterminated"));
}

#[test]
fn test_functions_listed_in_definition_order() {
    let json = payload("def b():\n    pass\ndef a():\n    pass\n");
    let names: Vec<_> = json["ir"]["functions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(json["ir"]["functions"][0]["instructions"], Value::Array(Vec::new()));
}
