use assert_cmd::Command;
use predicates::prelude::*;

fn arbor_cli() -> Command {
    Command::cargo_bin("arbor-cli").unwrap()
}

#[test]
fn formats_stdin_to_stdout() {
    arbor_cli()
        .args(["--preset", "compact"])
        .write_stdin(r#"{ "b": 1, "a": 2 }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"b":1,"a":2}"#));
}

#[test]
fn sort_keys_flag_overrides_the_preset() {
    arbor_cli()
        .args(["--preset", "compact", "--sort-keys"])
        .write_stdin(r#"{"b":1,"a":2}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":2,"b":1}"#));
}

#[test]
fn check_accepts_valid_input() {
    arbor_cli()
        .arg("--check")
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn check_rejects_invalid_input_with_a_diagnostic() {
    arbor_cli()
        .arg("--check")
        .write_stdin("[1,2,]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("trailing comma"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn reads_input_files_and_writes_output_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    std::fs::write(&input, r#"{"name":"John","age":30}"#).unwrap();

    arbor_cli()
        .args(["--preset", "pretty", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text, "{\n    \"age\": 30.000000,\n    \"name\": \"John\"\n}\n");
}

#[test]
fn missing_input_file_fails() {
    arbor_cli()
        .arg("/nonexistent/input.json")
        .assert()
        .failure();
}
