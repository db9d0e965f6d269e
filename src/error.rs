//! Crate-level error types.

use std::fmt;

/// Result alias carrying [`LociError`].
pub type Result<T> = std::result::Result<T, LociError>;

/// Errors produced by the loci crate.
#[derive(Debug)]
pub enum LociError {
    /// Sectioned discovery found slides but no sections to order them by.
    NoSections {
        /// Number of objects carrying the slide tag.
        tagged_slides: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene description parsing failure.
    SceneParse(String),
    /// A scene description referenced a parent that does not exist.
    UnknownParent(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for LociError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSections { tagged_slides } => write!(
                f,
                "sectioned discovery found {tagged_slides} slide(s) but no \
                 sections; at least one section and one slide are required"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SceneParse(msg) => write!(f, "scene parse error: {msg}"),
            Self::UnknownParent(name) => {
                write!(f, "unknown parent object: {name}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for LociError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LociError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
