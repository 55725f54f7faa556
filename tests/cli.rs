//! tests/cli.rs
//!
//! Usage contract of the binary: a wrong argument count prints a usage line
//! to stdout and exits with code 1 before any terminal setup, so nothing is
//! drawn and the tests run headless.

use std::process::Command;

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let out = Command::new(env!("CARGO_BIN_EXE_grafo-view"))
        .output()
        .expect("failed to run grafo-view");
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Usage: grafo-view <input-file>"),
        "stdout was: {stdout}"
    );
}

#[test]
fn extra_arguments_print_usage_and_exit_1() {
    let out = Command::new(env!("CARGO_BIN_EXE_grafo-view"))
        .args(["one.graph", "two.graph"])
        .output()
        .expect("failed to run grafo-view");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage:"));
}
