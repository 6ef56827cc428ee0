// CLI integration tests for the print/check flows.
use std::io::Write as _;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_rostable");
    Command::new(exe)
}

fn parse_json_line(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    let line = text.lines().next().expect("json line");
    serde_json::from_str(line).expect("valid json")
}

fn write_roster(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

const ROSTER: &str = r#"{
  "items": [
    { "name": "Ivanov Petr", "group": "1", "avg": "4.25", "debt": null },
    { "name": "Sidorov Ivan", "group": 31, "avg": 4, "debt": "C++" }
  ],
  "_meta": { "count": 2 }
}"#;

#[test]
fn print_renders_the_table() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_roster(&temp, "roster.json", ROSTER);

    let output = cmd()
        .args(["print", path.to_str().unwrap()])
        .output()
        .expect("print");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("|name"));
    assert_eq!(lines[1], "|---------------|--------|------|---------------|");
    assert!(lines[2].contains("Ivanov Petr"));
    assert!(lines[3].contains("Sidorov Ivan"));
}

#[test]
fn check_reports_record_count() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_roster(&temp, "roster.json", ROSTER);

    let output = cmd()
        .args(["check", path.to_str().unwrap()])
        .output()
        .expect("check");
    assert!(output.status.success());

    let summary = parse_json_line(&output.stdout);
    assert_eq!(summary.get("ok").and_then(Value::as_bool), Some(true));
    assert_eq!(summary.get("records").and_then(Value::as_u64), Some(2));
}

#[test]
fn missing_file_exits_with_resource_code() {
    let output = cmd().args(["print", "Wrong.json"]).output().expect("print");
    assert_eq!(output.status.code(), Some(3));

    let err = parse_json_line(&output.stderr);
    let obj = err.get("error").and_then(Value::as_object).expect("error object");
    assert_eq!(obj.get("kind").and_then(Value::as_str), Some("resource"));
}

#[test]
fn malformed_json_exits_with_parse_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_roster(&temp, "broken.json", "{ not json");

    let output = cmd()
        .args(["check", path.to_str().unwrap()])
        .output()
        .expect("check");
    assert_eq!(output.status.code(), Some(4));

    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"].as_str(), Some("parse"));
}

#[test]
fn count_mismatch_exits_with_schema_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mismatched = ROSTER.replace(r#""count": 2"#, r#""count": 4"#);
    let path = write_roster(&temp, "mismatch.json", &mismatched);

    let output = cmd()
        .args(["check", path.to_str().unwrap()])
        .output()
        .expect("check");
    assert_eq!(output.status.code(), Some(5));

    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"].as_str(), Some("schema"));
}
