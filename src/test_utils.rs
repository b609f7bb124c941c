//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a temporary directory whose last path component is `name`.
    ///
    /// Useful when the rendered root line or output file name matters.
    pub fn named(name: &str) -> (Self, PathBuf) {
        let test_dir = Self::new();
        let root = test_dir.add_dir(name);
        (test_dir, root)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory and any missing ancestors.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Collect every path below `root` relative to it, with `/` appended to
    /// directories, sorted.
    pub fn snapshot(root: &Path) -> Vec<String> {
        let mut found = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir).expect("Failed to read dir") {
                let entry = entry.expect("Failed to read entry");
                let path = entry.path();
                let relative = path
                    .strip_prefix(root)
                    .expect("Entry outside root")
                    .to_string_lossy()
                    .replace('\\', "/");
                if entry.file_type().expect("Failed to stat entry").is_dir() {
                    found.push(format!("{}/", relative));
                    pending.push(path);
                } else {
                    found.push(relative);
                }
            }
        }
        found.sort();
        found
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
