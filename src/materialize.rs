//! Create directories and empty files from parsed diagram entries

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::diagram::{EntryKind, ParsedEntry};
use crate::error::{ArborError, Result};

/// Counts from one materialization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Entries that did not exist before this run.
    pub created: usize,
    /// Entries that were already present and left untouched.
    pub existing: usize,
}

impl MaterializeReport {
    pub fn total(&self) -> usize {
        self.created + self.existing
    }
}

/// Creates parsed entries under a destination root, strictly in input order.
///
/// Existing directories and files are left as they are; file contents are
/// never written. The first failure aborts the run and whatever was created
/// before it stays on disk.
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn materialize(&self, entries: &[ParsedEntry]) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();

        for entry in entries {
            let target = self.target(entry)?;
            let created = match entry.kind {
                EntryKind::Dir => create_dir(&target)?,
                EntryKind::File => create_file(&target)?,
            };
            if created {
                debug!(path = %target.display(), kind = ?entry.kind, "created");
                report.created += 1;
            } else {
                report.existing += 1;
            }
        }

        info!(
            root = %self.root.display(),
            created = report.created,
            existing = report.existing,
            "materialized diagram"
        );
        Ok(report)
    }

    /// Resolve an entry below the root, refusing anything that could leave it.
    fn target(&self, entry: &ParsedEntry) -> Result<PathBuf> {
        let relative = Path::new(&entry.path);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(ArborError::PathEscapesRoot {
                entry: entry.path.clone(),
                root: self.root.clone(),
            });
        }
        Ok(self.root.join(relative))
    }
}

fn create_dir(target: &Path) -> Result<bool> {
    if target.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(target).map_err(|source| materialize_error(target, source))?;
    Ok(true)
}

fn create_file(target: &Path) -> Result<bool> {
    if target.is_file() {
        return Ok(false);
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| materialize_error(target, source))?;
    }
    match OpenOptions::new().write(true).create_new(true).open(target) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && target.is_file() => Ok(false),
        Err(source) => Err(materialize_error(target, source)),
    }
}

fn materialize_error(path: &Path, source: io::Error) -> ArborError {
    ArborError::Materialize {
        path: path.to_path_buf(),
        source,
    }
}
