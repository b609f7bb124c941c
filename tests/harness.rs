//! Test harness for arbor integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub use arbor::test_utils::TestDir;

pub fn run_arbor(dir: &Path, args: &[&str]) -> (String, String, bool) {
    run_arbor_with_stdin(dir, args, "")
}

pub fn run_arbor_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_arbor");
    let mut child = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run arbor");

    child
        .stdin
        .take()
        .expect("Failed to open stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for arbor");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_snapshot_marks_directories() {
        let dir = TestDir::new();
        dir.add_file("a/b.txt", "");
        assert_eq!(TestDir::snapshot(dir.path()), vec!["a/", "a/b.txt"]);
    }
}
