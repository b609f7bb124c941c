//! Indentation-stack parser for tree diagrams
//!
//! Each non-blank line is reduced to a name and an indentation width. A stack
//! of `(indent, path)` frames tracks the directories that enclose the current
//! line: frames at the same or deeper indentation are popped before the line
//! is attached to whatever directory remains on top.
//!
//! The heuristics are permissive and deliberately kept as they are, because
//! existing diagrams depend on them:
//!
//! - Indentation is `4 * (number of │ ├ └ glyphs anywhere on the line)` plus
//!   the number of leading spaces/tabs, so glyphs preceded by spaces count twice.
//! - A line is a directory when it contains `/` and either ends with `/` or
//!   contains one of the comment markers `#`, `;`, `%`.
//! - Everything from the first comment marker on is dropped, as are trailing
//!   spaces, underscores and hyphens.
//! - A name containing `/` is cut at the first slash and treated as a directory.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ArborError, Result};

use super::entry::ParsedEntry;
use super::path::{join, normalize};

/// A comment marker together with the whitespace in front of it.
static COMMENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[#;%]").expect("COMMENT_MARKER regex is invalid"));

const COMMENT_CHARS: [char; 3] = ['#', ';', '%'];
const INDENT_GLYPHS: [char; 3] = ['│', '├', '└'];
const DECORATION: [char; 7] = ['│', '├', '└', '─', '┬', ' ', '\t'];
const TRAILING_NOISE: [char; 3] = [' ', '_', '-'];

/// Width contributed by each box-drawing glyph.
const GLYPH_WIDTH: isize = 4;

#[derive(Debug)]
struct Frame {
    indent: isize,
    path: String,
}

/// Streaming diagram parser. Feed it lines in order.
#[derive(Debug)]
pub struct DiagramParser {
    stack: Vec<Frame>,
}

impl DiagramParser {
    pub fn new() -> Self {
        Self {
            // Sentinel base frame; no line has a negative indent, so it is never popped
            stack: vec![Frame {
                indent: -1,
                path: String::new(),
            }],
        }
    }

    /// Parse one line. Blank lines yield `None` and leave the stack untouched.
    pub fn feed(&mut self, line: &str) -> Option<ParsedEntry> {
        if line.trim().is_empty() {
            return None;
        }

        let indent = measure_indent(line);
        let content = line.trim_start_matches(DECORATION).trim();
        let (name, is_dir) = extract_name(content);

        while self.stack.last().is_some_and(|top| indent <= top.indent) {
            self.stack.pop();
        }
        let parent = self.stack.last().map_or("", |top| top.path.as_str());

        let full_path = join(parent, &name.replace('/', ""));
        let mut path = normalize(&full_path)
            .replace('\\', "/")
            .trim_end_matches('/')
            .to_string();
        if is_dir {
            path.push('/');
        }

        let depth = self.stack.len();
        if is_dir {
            self.stack.push(Frame {
                indent,
                path: full_path,
            });
        }

        Some(if is_dir {
            ParsedEntry::dir(path, depth)
        } else {
            ParsedEntry::file(path, depth)
        })
    }
}

impl Default for DiagramParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a whole diagram into entries in line order.
///
/// Only blank input is rejected; any other text produces some entry list.
pub fn parse(text: &str) -> Result<Vec<ParsedEntry>> {
    if text.trim().is_empty() {
        return Err(ArborError::EmptyInput);
    }

    let mut parser = DiagramParser::new();
    let entries: Vec<ParsedEntry> = text.lines().filter_map(|line| parser.feed(line)).collect();
    debug!(entries = entries.len(), "parsed diagram");
    Ok(entries)
}

fn measure_indent(line: &str) -> isize {
    let glyphs = line.chars().filter(|c| INDENT_GLYPHS.contains(c)).count();
    let leading = line.chars().take_while(|c| matches!(c, ' ' | '\t')).count();
    glyphs as isize * GLYPH_WIDTH + leading as isize
}

/// Reduce decorated line content to an entry name and whether it is a directory.
/// Directory names come back with exactly one trailing `/`.
fn extract_name(content: &str) -> (String, bool) {
    let looks_like_dir =
        content.contains('/') && (content.ends_with('/') || content.contains(COMMENT_CHARS));

    let name = match COMMENT_MARKER.find(content) {
        Some(m) => &content[..m.start()],
        None => content,
    };
    let name = name.trim_end_matches(TRAILING_NOISE);

    if let Some((head, _)) = name.split_once('/') {
        (format!("{}/", head), true)
    } else if looks_like_dir {
        (format!("{}/", name), true)
    } else {
        (name.to_string(), false)
    }
}
