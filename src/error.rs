//! Error type shared by the render and build pipelines

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers of the render and build pipelines.
///
/// A directory that cannot be listed during rendering is not an error: it is
/// reported in-band as a [`crate::TreeLine::Error`] and the walk continues.
#[derive(Debug, Error)]
pub enum ArborError {
    /// The render root does not exist or is not a directory.
    #[error("not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("unsupported depth '{0}' (expected 0, 1 or -1)")]
    InvalidDepth(String),

    #[error("unsupported format '{0}' (expected md or txt)")]
    InvalidFormat(String),

    /// The diagram contained nothing but whitespace.
    #[error("diagram is empty")]
    EmptyInput,

    /// Creating a directory or file failed. Entries created before this one stay on disk.
    #[error("failed to create {}: {source}", path.display())]
    Materialize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A parsed entry would resolve outside the destination root.
    #[error("refusing to create '{entry}' outside of {}", root.display())]
    PathEscapesRoot { entry: String, root: PathBuf },

    #[error("I/O error for path {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ArborError {
    /// The filesystem path this error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidRoot(p) | Self::Materialize { path: p, .. } | Self::Io { path: p, .. } => {
                Some(p)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArborError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_error_names_path_and_cause() {
        let err = ArborError::Materialize {
            path: PathBuf::from("/dest/a/b.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/dest/a/b.txt"), "{}", message);
        assert!(message.contains("denied"), "{}", message);
        assert_eq!(err.path(), Some(&PathBuf::from("/dest/a/b.txt")));
    }

    #[test]
    fn test_empty_input_has_no_path() {
        assert!(ArborError::EmptyInput.path().is_none());
    }
}
