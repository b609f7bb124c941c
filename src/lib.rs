//! Arbor - render directories as tree diagrams and build directories back from them
//!
//! Two independent pipelines:
//!
//! - **render**: [`TreeRenderer`] walks a directory into [`TreeLine`]s, and
//!   [`export_tree`] saves them under a name derived by [`derive_filename`].
//! - **build**: [`parse`] turns diagram text into [`ParsedEntry`] records and
//!   [`Materializer`] creates them on disk.

pub mod diagram;
pub mod document;
pub mod error;
pub mod export;
pub mod materialize;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use diagram::{DiagramParser, EntryKind, ParsedEntry, parse};
pub use document::{Format, compose_document, derive_filename, strip_document_header, strip_root_line};
pub use error::{ArborError, Result};
pub use export::{ExportOutcome, ExportRequest, RenderedDocument, export_tree, render_document};
pub use materialize::{MaterializeReport, Materializer};
pub use output::{print_entries_json, print_tree, write_entries, write_tree};
pub use tree::{Depth, RenderConfig, TreeLine, TreeRenderer, root_line};
