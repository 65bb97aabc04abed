//! Integration tests for the moddep binary.
//!
//! The binary is invoked directly (via `CARGO_BIN_EXE_moddep`) with the
//! `NM` override pointed at a scripted symbol-dump tool, so the tests
//! exercise the real CLI surface end to end without compiled artifacts.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the moddep binary.
fn moddep_bin() -> &'static str {
    // CARGO_BIN_EXE_<name> is set by Cargo during test builds to the
    // correct binary path, regardless of target directory.
    env!("CARGO_BIN_EXE_moddep")
}

/// Writes an executable `/bin/sh` script that prints a symbol table chosen
/// by the basename of its single argument.
fn fake_tool(dir: &Path, cases: &[(&str, &str)]) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let mut body = String::from("#!/bin/sh\ncase \"$(basename \"$1\")\" in\n");
    for (artifact, table) in cases {
        body.push_str(&format!("{artifact})\n"));
        for line in table.lines() {
            body.push_str(&format!("printf '%s\\n' '{line}'\n"));
        }
        body.push_str(";;\n");
    }
    body.push_str("*)\nexit 1\n;;\nesac\n");

    let path = dir.join("fake-nm");
    fs::write(&path, body).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("chmod script");
    path
}

fn run_moddep(tool: &Path, artifacts: &[&str]) -> Output {
    Command::new(moddep_bin())
        .args(artifacts)
        .env("NM", tool)
        .output()
        .expect("moddep should launch")
}

#[test]
fn test_reports_dependencies_sorted() {
    let dir = TempDir::new().expect("temp dir");
    let tool = fake_tool(
        dir.path(),
        &[
            ("module-a.so", "0000000000001040 T pa_foo"),
            ("module-b.so", "                 U pa_foo"),
        ],
    );

    // Input order deliberately differs from output order.
    let output = run_moddep(&tool, &["module-b.so", "module-a.so"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "module-a.so: \nmodule-b.so: module-a.so\n"
    );
}

#[test]
fn test_conflicts_and_unresolved_are_warnings_not_failures() {
    let dir = TempDir::new().expect("temp dir");
    let tool = fake_tool(
        dir.path(),
        &[
            ("a", "0000000000001040 T pa_shared"),
            ("b", "0000000000002040 T pa_shared\n                 U pa_gone"),
        ],
    );

    let output = run_moddep(&tool, &["a", "b"]);

    // Both anomalies are reported, but the exit code stays zero.
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "CONFLICT: symbol 'pa_shared' exported by both 'b' and 'a'"
    ));
    assert!(
        stderr.contains("WARNING: Unresolved symbol 'pa_gone' in ['b']")
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a: \nb: \n");
}

#[test]
fn test_unreadable_artifact_does_not_block_the_rest() {
    let dir = TempDir::new().expect("temp dir");
    let tool = fake_tool(
        dir.path(),
        &[
            ("a", "0000000000001040 T pa_foo"),
            ("b", "                 U pa_foo"),
        ],
    );

    let output = run_moddep(&tool, &["a", "not-a-module", "b"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "a: \nb: a\n"
    );
    // The skip is surfaced on stderr.
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("not-a-module")
    );
}

#[test]
fn test_repeated_runs_byte_identical_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let tool = fake_tool(
        dir.path(),
        &[
            ("a", "0000000000001040 T pa_foo\n0000000000001080 T pa_bar"),
            ("b", "                 U pa_foo\n                 U pa_bar"),
            ("c", "                 U pa_foo\n                 U pa_gone"),
        ],
    );

    let first = run_moddep(&tool, &["a", "b", "c"]);
    let second = run_moddep(&tool, &["a", "b", "c"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_requires_at_least_one_artifact() {
    let output = Command::new(moddep_bin())
        .output()
        .expect("moddep should launch");

    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("ARTIFACT")
    );
}
