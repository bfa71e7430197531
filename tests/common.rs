//! Helpers shared by the binary integration tests.

#![allow(dead_code)]

pub use assert_cmd::Command;

/// Command running the `eert` binary built for this test run.
pub fn eert_cmd() -> Command {
    Command::cargo_bin("eert").expect("Failed to find eert binary for testing")
}

pub fn diagram(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
