mod common;

use common::*;
use std::process::Command;

fn cli_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pgapi"))
}

#[test]
fn test_cli_help() {
    let output = cli_command().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drive the action dispatch bridge"));
    assert!(stdout.contains("dispatch"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("run"));
}

#[test]
fn test_cli_version() {
    let output = cli_command().arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pgapi"));
}

#[test]
fn test_cli_dispatch_hello() {
    let output = cli_command()
        .args(["dispatch", "hello", r#"{"name":"World"}"#])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        r#"{"data":["Hello, World"],"message":"","state":0}"#
    );
}

#[test]
fn test_cli_dispatch_error_exit_code() {
    let output = cli_command()
        .args(["dispatch", "missing"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("action missing not found"));
}

#[test]
fn test_cli_dispatch_with_config() {
    let output = cli_command()
        .args(["dispatch", "hello", r#"{"name":"x"}"#, "--config", "oops"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid plugin config cannot parse oops"));
}

#[test]
fn test_cli_list() {
    let output = cli_command().arg("list").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hello"));
    assert!(stdout.contains("meta"));
}

#[test]
fn test_cli_run_cases() {
    let dir = create_test_dir();
    let path = write_case_file(
        dir.path(),
        "cases.yaml",
        r#"
cases:
  - name: greets
    action: hello
    input:
      name: World
    expect_data: ["Hello, World"]
"#,
    );

    let output = cli_command().arg("run").arg(&path).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 passed, 0 failed, 1 total"));
}

#[test]
fn test_cli_run_failing_cases() {
    let dir = create_test_dir();
    let path = write_case_file(
        dir.path(),
        "cases.yaml",
        r#"
cases:
  - action: hello
    input: "not-json"
    expect_state: 0
"#,
    );

    let output = cli_command().arg("run").arg(&path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 passed, 1 failed, 1 total"));
}

#[test]
fn test_cli_run_missing_file() {
    let output = cli_command()
        .args(["run", "/nonexistent/cases.yaml"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
