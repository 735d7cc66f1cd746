//! Behavioral specs for an unwritable stdout.

use crate::prelude::*;

/// > A failed write exits non-zero with a diagnostic
#[cfg(target_os = "linux")]
#[test]
fn full_device_exits_with_failure() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("/dev/full should be writable");

    greeter_cmd()
        .stdout(full)
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("failed to write greeting"));
}

/// > A closed reader exits non-zero without hanging or retrying
#[cfg(unix)]
#[test]
fn closed_pipe_exits_with_failure() {
    use std::process::Stdio;

    let mut child = greeter_cmd()
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("command should spawn");
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("command should finish");
    // The greeting may land in the pipe buffer before the reader closes.
    if !output.status.success() {
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("failed to write greeting"), "stderr: {stderr}");
    }
}
