//! Render a directory and persist the diagram document

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::document::{Format, compose_document, derive_filename};
use crate::error::{ArborError, Result};
use crate::tree::{Depth, RenderConfig, TreeLine, TreeRenderer, dir_name};

/// Everything needed to render one directory and save it.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub root: PathBuf,
    pub depth: Depth,
    pub format: Format,
    pub save_dir: PathBuf,
    pub ignore_patterns: Vec<String>,
}

/// A rendered diagram, ready to be displayed or written.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub dir_name: String,
    /// Body lines, without the root line.
    pub lines: Vec<TreeLine>,
    pub file_name: String,
    /// Full document text: optional header, root line, body.
    pub text: String,
}

impl RenderedDocument {
    /// Root line followed by the body, one string per line.
    pub fn diagram_lines(&self) -> Vec<String> {
        std::iter::once(format!("{}/", self.dir_name))
            .chain(self.lines.iter().map(|l| l.to_string()))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub document: RenderedDocument,
}

/// Render `request.root` without touching the save directory.
pub fn render_document(request: &ExportRequest) -> Result<RenderedDocument> {
    let renderer = TreeRenderer::new(RenderConfig {
        depth: request.depth,
        ignore_patterns: request.ignore_patterns.clone(),
    });
    let lines = renderer.render(&request.root)?;

    let dir_name = dir_name(&request.root);
    let mut document = RenderedDocument {
        file_name: derive_filename(&dir_name, request.depth, request.format),
        dir_name,
        lines,
        text: String::new(),
    };
    document.text = compose_document(&document.dir_name, request.format, &document.diagram_lines());
    Ok(document)
}

/// Render `request.root` and write the document into `request.save_dir`.
pub fn export_tree(request: &ExportRequest) -> Result<ExportOutcome> {
    let document = render_document(request)?;
    let path = write_document(&request.save_dir, &document)?;
    info!(
        path = %path.display(),
        lines = document.lines.len(),
        "saved tree diagram"
    );
    Ok(ExportOutcome { path, document })
}

fn write_document(save_dir: &Path, document: &RenderedDocument) -> Result<PathBuf> {
    let path = save_dir.join(&document.file_name);
    fs::write(&path, document.text.as_bytes()).map_err(|source| ArborError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    fn request(root: PathBuf, save_dir: PathBuf, depth: Depth, format: Format) -> ExportRequest {
        ExportRequest {
            root,
            depth,
            format,
            save_dir,
            ignore_patterns: Vec::new(),
        }
    }

    #[test]
    fn test_export_markdown() {
        let (dir, root) = TestDir::named("proj");
        dir.add_file("proj/a.txt", "");
        let save = dir.add_dir("out");

        let outcome = export_tree(&request(root, save.clone(), Depth::Current, Format::Md)).unwrap();
        assert_eq!(outcome.path, save.join("proj_tree-0.md"));
        let written = fs::read_to_string(&outcome.path).unwrap();
        assert_eq!(written, "# proj\n\nproj/\n└── a.txt");
    }

    #[test]
    fn test_export_text_pierce() {
        let (dir, root) = TestDir::named("proj");
        dir.add_file("proj/src/lib.rs", "");
        let save = dir.add_dir("out");

        let outcome = export_tree(&request(root, save, Depth::Pierce, Format::Txt)).unwrap();
        assert!(outcome.path.ends_with("proj_tree-2.txt"));
        let written = fs::read_to_string(&outcome.path).unwrap();
        assert_eq!(written, "proj/\n└── src/\n    └── lib.rs");
    }

    #[test]
    fn test_invalid_root_writes_nothing() {
        let dir = TestDir::new();
        let save = dir.add_dir("out");
        let result = export_tree(&request(
            dir.path().join("missing"),
            save.clone(),
            Depth::Current,
            Format::Md,
        ));
        assert!(matches!(result, Err(ArborError::InvalidRoot(_))));
        assert_eq!(fs::read_dir(&save).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_save_dir_is_io_error() {
        let (dir, root) = TestDir::named("proj");
        let result = export_tree(&request(
            root,
            dir.path().join("nowhere"),
            Depth::Current,
            Format::Txt,
        ));
        assert!(matches!(result, Err(ArborError::Io { .. })));
    }
}
