//! Tests for the `partsim` binary: argument handling and what a
//! terminal session shows under the default logger setup.

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn partsim(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_partsim"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_or_extra_argument_prints_usage() {
    let cases: [&[&str]; 2] = [&[], &["10", "20"]];
    for args in cases {
        let output = partsim(args, "");
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("usage: partsim <memory_size>"), "{}", stderr(&output));
    }
}

#[test]
fn test_non_numeric_size_fails() {
    let output = partsim(&["abc"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("memory size 'abc' is not a positive integer"));
}

#[test]
fn test_zero_size_is_invalid_request() {
    let output = partsim(&["0"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid request: memory size must be positive"));
}

#[test]
fn test_size_above_maximum_is_capacity_exceeded() {
    let output = partsim(&["1048577"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("exceeds the maximum allowed"));
}

#[test]
fn test_rejected_command_is_shown_once() {
    let output = partsim(&["100"], "RL nobody\nX\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("process nobody not found").count(), 1);
    assert!(stdout.contains("Error: process nobody not found"));
    assert_eq!(stderr(&output), "");
}
