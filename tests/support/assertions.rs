//! Assertions over captured command output.

use std::process::Output;

/// Panic with the command's stderr unless it exited successfully.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command exited with {}:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Assert that stdout contains `expected`.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(
        out.contains(expected),
        "expected stdout to contain '{}', got: {}",
        expected,
        out
    );
}

/// Parse stdout as a JSON document.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
