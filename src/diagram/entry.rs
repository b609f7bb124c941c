//! Parsed diagram entries

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One line of a diagram resolved to a path relative to the destination root.
///
/// Directory paths end with `/`, file paths do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
    /// Nesting depth at the time the line was read. Informational only.
    pub depth: usize,
}

impl ParsedEntry {
    pub fn dir(path: impl Into<String>, depth: usize) -> Self {
        Self {
            kind: EntryKind::Dir,
            path: path.into(),
            depth,
        }
    }

    pub fn file(path: impl Into<String>, depth: usize) -> Self {
        Self {
            kind: EntryKind::File,
            path: path.into(),
            depth,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_like_the_diagram_record() {
        let json = serde_json::to_string(&ParsedEntry::dir("a/", 1)).unwrap();
        assert_eq!(json, r#"{"type":"dir","path":"a/","depth":1}"#);
        let json = serde_json::to_string(&ParsedEntry::file("a/b.txt", 2)).unwrap();
        assert_eq!(json, r#"{"type":"file","path":"a/b.txt","depth":2}"#);
    }
}
