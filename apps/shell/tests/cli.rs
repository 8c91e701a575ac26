use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

fn mshop(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mshop"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout holds JSON")
}

#[test]
fn normalize_reads_stdin_and_keeps_shape() {
    let dir = tempfile::tempdir().unwrap();
    let input = json!([
        { "order.product.attribute.code": "size", "order.product.attribute.value": "xl" },
        { "order.product.attribute.type": "custom", "order.product.attribute.code": "note",
          "order.product.attribute.value": { "text": "gift" } }
    ]);

    let output = mshop(&dir)
        .args(["normalize", "-"])
        .write_stdin(input.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records = stdout_json(&output);
    assert_eq!(records.as_array().map(Vec::len), Some(2));
    assert_eq!(records[0]["order.product.attribute.quantity"], 1);
    assert_eq!(records[1]["order.product.attribute.value"], json!({ "text": "gift" }));
    assert!(records[0].get("order.product.attribute.siteid").is_none());
}

#[test]
fn normalize_warns_about_unknown_keys_on_stderr() {
    let dir = tempfile::tempdir().unwrap();

    mshop(&dir)
        .args(["normalize", "-"])
        .write_stdin(r#"{"order.product.attribute.code": "size", "order.product.attribute.price": 5}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("price").not())
        .stderr(predicate::str::contains("Unrecognized keys ignored"));
}

#[test]
fn invalid_record_fails_with_its_index() {
    let dir = tempfile::tempdir().unwrap();

    mshop(&dir)
        .args(["normalize", "-"])
        .write_stdin(r#"[{"order.product.attribute.code": "a"}, {"order.product.attribute.code": ""}]"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Record 1 is not a valid order product attribute"));
}

#[test]
fn copy_builds_order_attributes_from_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("catalog.json");
    fs::write(
        &file,
        json!({
            "attribute.id": "21",
            "attribute.siteid": "1.",
            "attribute.domain": "product",
            "attribute.type": "color",
            "attribute.code": "red",
            "attribute.label": "Red"
        })
        .to_string(),
    )
    .unwrap();

    let output = mshop(&dir)
        .arg("copy")
        .arg(&file)
        .args(["--parent", "7", "--quantity", "3", "--private", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \""))
        .get_output()
        .stdout
        .clone();

    let record = stdout_json(&output);
    assert_eq!(record["order.product.attribute.attrid"], "21");
    assert_eq!(record["order.product.attribute.parentid"], "7");
    assert_eq!(record["order.product.attribute.code"], "color");
    assert_eq!(record["order.product.attribute.value"], "red");
    assert_eq!(record["order.product.attribute.quantity"], 3);
    assert!(record["order.product.attribute.mtime"].is_string());
}

#[test]
fn config_file_in_working_directory_sets_export_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("mshop.toml"), "[export]\nprivate = true\n\n[log]\nlevel = \"error\"\n")
        .unwrap();

    mshop(&dir)
        .args(["normalize", "-"])
        .write_stdin(r#"{"order.product.attribute.parentid": "9", "order.product.attribute.code": "s"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""order.product.attribute.parentid":"9""#))
        .stderr(predicate::str::is_empty());
}

#[test]
fn environment_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("shop.toml");
    fs::write(&config, "[export]\npretty = false\n").unwrap();

    mshop(&dir)
        .arg("--config")
        .arg(&config)
        .args(["normalize", "-"])
        .env("MSHOP__EXPORT__PRETTY", "true")
        .write_stdin(r#"{"order.product.attribute.code": "s"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \""));
}

#[test]
fn missing_config_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    mshop(&dir)
        .args(["--config", "missing.toml", "normalize", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
