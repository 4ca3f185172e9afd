//! End-to-end tests of the dotdraw binary

use std::fs;
use std::process::{Command, Output};

use predicates::prelude::*;
use tempfile::TempDir;

fn dotdraw(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dotdraw"))
        .args(args)
        .env_remove("DOTDRAW_LAYOUT")
        .env_remove("DOTDRAW_FORMAT")
        .env_remove("DOTDRAW_ENGINE")
        .output()
        .expect("dotdraw binary should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_formats_json_lists_selectors() {
    let output = dotdraw(&["formats", "--format", "json"]);

    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(listing["layouts"].as_array().unwrap().iter().any(|l| l == "neato"));
    assert!(predicate::str::contains("\"plain-ext\"").eval(&stdout(&output)));
}

#[test]
fn test_dot_prints_document() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("pair.json");
    fs::write(
        &input,
        r#"{ "directed": true, "nodes": [ { "label": "say \"hi\"" }, {} ],
             "edges": [ { "source": 0, "target": 1 } ] }"#,
    )
    .unwrap();

    let output = dotdraw(&["dot", input.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let document = stdout(&output);
    assert!(predicate::str::starts_with("digraph {\n").eval(&document));
    assert!(predicate::str::contains(r#"0 [label="say \"hi\""];"#).eval(&document));
    assert!(predicate::str::contains("0 -> 1;").eval(&document));
}

#[test]
fn test_dot_reports_toml_syntax_errors() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("broken.toml");
    fs::write(&input, "directed = \n").unwrap();

    let output = dotdraw(&["dot", input.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(predicate::str::contains("Invalid TOML syntax").eval(&stderr(&output)));
}

#[test]
fn test_render_rejects_unknown_format_before_rendering() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("single.json");
    fs::write(&input, r#"{ "nodes": [ {} ] }"#).unwrap();

    let output = dotdraw(&["render", input.to_str().unwrap(), "--format", "raw"]);

    assert!(!output.status.success());
    assert!(predicate::str::contains("Invalid output format 'raw'").eval(&stderr(&output)));
    assert!(!temp.path().join("single.raw").exists());
}

#[test]
fn test_render_with_missing_engine_fails() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("single.json");
    fs::write(&input, r#"{ "nodes": [ {} ] }"#).unwrap();

    let output = dotdraw(&[
        "render",
        input.to_str().unwrap(),
        "--engine",
        "dotdraw-no-such-engine",
    ]);

    assert!(!output.status.success());
    assert!(predicate::str::contains("not found on PATH").eval(&stderr(&output)));
}

#[test]
fn test_dot_rejects_attribute_names_that_inject_statements() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("inj.json");
    fs::write(
        &input,
        r#"{"directed":true,"nodes":[{"x=\"1\"]; 99 -> 100 [y":"z"},{}],"edges":[]}"#,
    )
    .unwrap();

    let output = dotdraw(&["dot", input.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(predicate::str::contains("99 -> 100").not().eval(&stdout(&output)));
    assert!(predicate::str::contains("identifier").eval(&stderr(&output)));
}
