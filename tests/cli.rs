use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;
use tempfile::tempdir;

fn request_json() -> String {
    json!({
        "chartConfig": {
            "displayName": "Monthly volume",
            "renderingConfig": { "chartDisplayType": "LINE_CHART" }
        },
        "evaluationData": {
            "groupByValuesForAllKeys": [{ "groupByValues": [
                { "value": { "stringValue": "Jan" } },
                { "value": { "stringValue": "Feb" } }
            ] }],
            "analyticsNumbers": [
                { "value": 1, "groupByValueIndexes": [0] },
                { "value": 2, "groupByValueIndexes": [1] }
            ]
        },
        "chartDataMaps": {}
    })
    .to_string()
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("chartopts").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chartopts"));
}

#[test]
fn build_from_stdin_prints_payload() {
    let mut cmd = assert_cmd::Command::cargo_bin("chartopts").unwrap();
    cmd.args(["build", "--input", "-", "--compact"])
        .write_stdin(request_json());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""export":{"type":"png""#))
        .stdout(predicate::str::contains(r#""name":"Jan, Feb""#));
}

#[test]
fn build_writes_options_and_csv_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("request.json");
    let out = dir.path().join("options.json");
    let csv = dir.path().join("table.csv");
    std::fs::write(&input, request_json()).unwrap();

    let mut cmd = Command::cargo_bin("chartopts").unwrap();
    cmd.args(["build", "--options-only", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--csv")
        .arg(&csv);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Saved 2 rows"));

    let options: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(options["title"]["text"], "Monthly volume");
    assert!(options.get("export").is_none());

    let table = std::fs::read_to_string(&csv).unwrap();
    assert!(table.starts_with("series,category,value"));
    assert!(table.contains("\"Jan, Feb\",Feb,2"));
}

#[test]
fn missing_evaluation_data_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("request.json");
    std::fs::write(&input, r#"{ "chartConfig": {}, "chartDataMaps": {} }"#).unwrap();

    let mut cmd = Command::cargo_bin("chartopts").unwrap();
    cmd.args(["build", "--input"]).arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("evaluationData"));
}

#[test]
fn unreadable_input_fails() {
    let mut cmd = Command::cargo_bin("chartopts").unwrap();
    cmd.args(["build", "--input", "/definitely/not/here.json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}
