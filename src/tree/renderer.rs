//! TreeRenderer - walks a directory and produces diagram lines

use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

use tracing::{debug, warn};

use crate::error::{ArborError, Result};

use super::config::RenderConfig;
use super::filter::NameFilter;
use super::line::TreeLine;

/// A listed child of a directory, with its sibling position already known.
#[derive(Debug)]
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_last: bool,
}

/// Outcome of listing one directory.
#[derive(Debug)]
enum Listing {
    Children(Vec<Child>),
    Failed(String),
}

/// Pending children of a directory on the work stack.
struct Frame {
    children: vec::IntoIter<Child>,
    depth: usize,
}

/// Renders a directory as an ordered list of [`TreeLine`]s.
///
/// The walk is pre-order with siblings sorted by name. The root itself is not
/// part of the output; callers prepend [`root_line`] when they need it.
pub struct TreeRenderer {
    config: RenderConfig,
    filter: NameFilter,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let filter = NameFilter::new(&config.ignore_patterns);
        Self { config, filter }
    }

    /// Render the children of `root`.
    ///
    /// Fails only when `root` is not a directory. Directories that cannot be
    /// listed further down show up as [`TreeLine::Error`] in place of their children.
    pub fn render(&self, root: &Path) -> Result<Vec<TreeLine>> {
        if !root.is_dir() {
            return Err(ArborError::InvalidRoot(root.to_path_buf()));
        }

        let mut lines = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        self.descend(root, 0, &mut stack, &mut lines);

        while let Some(frame) = stack.last_mut() {
            let depth = frame.depth;
            let Some(child) = frame.children.next() else {
                stack.pop();
                continue;
            };

            lines.push(TreeLine::entry(depth, child.is_last, &child.name, child.is_dir));
            if child.is_dir && self.config.depth.allows_descent(depth) {
                self.descend(&child.path, depth + 1, &mut stack, &mut lines);
            }
        }

        debug!(root = %root.display(), lines = lines.len(), "rendered tree");
        Ok(lines)
    }

    /// List `dir` and queue its children, or record the listing failure inline.
    fn descend(&self, dir: &Path, depth: usize, stack: &mut Vec<Frame>, lines: &mut Vec<TreeLine>) {
        match self.list(dir) {
            Listing::Children(children) => stack.push(Frame {
                children: children.into_iter(),
                depth,
            }),
            Listing::Failed(message) => {
                warn!("cannot list {}: {}", dir.display(), message);
                lines.push(TreeLine::error(message));
            }
        }
    }

    fn list(&self, dir: &Path) -> Listing {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => return Listing::Failed(e.to_string()),
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        let mut children: Vec<Child> = entries
            .into_iter()
            .map(|entry| Child {
                name: entry.file_name().to_string_lossy().to_string(),
                // Symlinks are never followed, unlike an `isdir` check: a link to a
                // directory lists as a plain entry and is not descended into
                is_dir: entry.file_type().is_ok_and(|t| t.is_dir()),
                path: entry.path(),
                is_last: false,
            })
            .filter(|child| !self.filter.is_ignored(&child.name))
            .collect();

        if let Some(last) = children.last_mut() {
            last.is_last = true;
        }
        debug!(dir = %dir.display(), entries = children.len(), "listed directory");
        Listing::Children(children)
    }
}

/// Name used for the root line and output file, taken from the last path component.
pub fn dir_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().to_string();
    }
    fs::canonicalize(root)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| ".".to_string())
}

/// The synthetic `<name>/` line that heads a full diagram.
pub fn root_line(root: &Path) -> String {
    format!("{}/", dir_name(root))
}
