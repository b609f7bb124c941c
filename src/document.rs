//! Output document naming and layout
//!
//! A saved diagram is named `{dir}_tree{suffix}.{format}`, where the suffix
//! encodes the depth selector (`0` → `-0`, `1` → `-1`, `-1` → `-2`).
//! Markdown documents start with a `# {dir}` header and a blank line.

use std::fmt;
use std::str::FromStr;

use crate::error::ArborError;
use crate::tree::Depth;

/// File format of a saved diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Md,
    Txt,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Md => "md",
            Format::Txt => "txt",
        }
    }
}

impl FromStr for Format {
    type Err = ArborError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" => Ok(Format::Md),
            "txt" => Ok(Format::Txt),
            _ => Err(ArborError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// File name suffix for a depth selector.
pub fn depth_suffix(depth: Depth) -> &'static str {
    match depth {
        Depth::Current => "-0",
        Depth::OneLevel => "-1",
        Depth::Pierce => "-2",
    }
}

/// `{dir_name}_tree{suffix}.{format}`
pub fn derive_filename(dir_name: &str, depth: Depth, format: Format) -> String {
    format!("{}_tree{}.{}", dir_name, depth_suffix(depth), format)
}

/// Header written before the diagram, if the format has one.
pub fn header(dir_name: &str, format: Format) -> Option<String> {
    match format {
        Format::Md => Some(format!("# {}\n\n", dir_name)),
        Format::Txt => None,
    }
}

/// Join diagram lines into the persisted document. No trailing newline is added.
pub fn compose_document<S: AsRef<str>>(dir_name: &str, format: Format, lines: &[S]) -> String {
    let mut document = header(dir_name, format).unwrap_or_default();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            document.push('\n');
        }
        document.push_str(line.as_ref());
    }
    document
}

/// Drop a leading `# name` header line and the blank line after it.
///
/// Text without such a header is returned unchanged.
pub fn strip_document_header(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("# ") else {
        return text;
    };
    let Some((_, after_header)) = rest.split_once('\n') else {
        return text;
    };
    match after_header.split_once('\n') {
        Some((blank, body)) if blank.trim().is_empty() => body,
        None if after_header.trim().is_empty() => "",
        _ => text,
    }
}

/// Drop the first non-blank line, which in a rendered diagram is the synthetic root line.
pub fn strip_root_line(text: &str) -> &str {
    let mut rest = text;
    loop {
        match rest.split_once('\n') {
            Some((line, tail)) if line.trim().is_empty() => rest = tail,
            Some((_, tail)) => return tail,
            None => return "",
        }
    }
}
