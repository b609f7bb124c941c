//! Rendered diagram lines

use std::fmt;

/// Indentation emitted per level below the root.
pub const INDENT: &str = "    ";
pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";

/// One line of a rendered diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLine {
    Entry {
        /// Levels below the root; the line is indented by `4 * depth` spaces.
        depth: usize,
        is_last: bool,
        name: String,
        is_dir: bool,
    },
    /// A directory whose children could not be listed.
    Error { message: String },
}

impl TreeLine {
    pub fn entry(depth: usize, is_last: bool, name: impl Into<String>, is_dir: bool) -> Self {
        TreeLine::Entry {
            depth,
            is_last,
            name: name.into(),
            is_dir,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        TreeLine::Error {
            message: message.into(),
        }
    }

    /// Leading indentation, empty for error lines.
    pub fn prefix(&self) -> String {
        match self {
            TreeLine::Entry { depth, .. } => INDENT.repeat(*depth),
            TreeLine::Error { .. } => String::new(),
        }
    }

    pub fn connector(&self) -> &'static str {
        match self {
            TreeLine::Entry { is_last: true, .. } => LAST_BRANCH,
            TreeLine::Entry { .. } => BRANCH,
            TreeLine::Error { .. } => "",
        }
    }

    /// Entry name with a trailing `/` for directories, or the comment text for errors.
    pub fn label(&self) -> String {
        match self {
            TreeLine::Entry {
                name, is_dir: true, ..
            } => format!("{}/", name),
            TreeLine::Entry { name, .. } => name.clone(),
            TreeLine::Error { message } => format!("# error: {}", message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TreeLine::Error { .. })
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix(), self.connector(), self.label())
    }
}
