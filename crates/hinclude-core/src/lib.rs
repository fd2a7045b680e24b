// src/lib.rs
//
// A single IncludeError covers driver failures and per-directive diagnostics.

pub mod directive;
pub mod driver;
pub mod expander;
pub mod resolver;
pub mod search_path;

pub use directive::Directive;
pub use driver::{preprocess, ExpandConfig, Preprocessor};
pub use expander::Expander;
pub use resolver::resolve;
pub use search_path::SearchPath;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Indicates file + 1-based line of a directive, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: &Path, line: usize) -> Self {
        Self {
            file: file.display().to_string(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at file {} at line {}", self.file, self.line)
    }
}

#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("failed to open input file {}: {source}", .path.display())]
    UnreadableInput { path: PathBuf, source: io::Error },

    #[error("failed to open output file {}: {source}", .path.display())]
    UnwritableOutput { path: PathBuf, source: io::Error },

    #[error("unknown include file {name} {location}")]
    UnresolvedInclude {
        name: String,
        location: SourceLocation,
    },

    /// The path resolved but could not be opened. Reported like an
    /// unresolved include, naming the file's basename.
    #[error("unknown include file {name} {location}")]
    UnreadableInclude {
        name: String,
        location: SourceLocation,
        source: io::Error,
    },

    #[error("cyclic include of {name} {location}")]
    CyclicInclude {
        name: String,
        location: SourceLocation,
    },

    #[error("include depth limit {limit} exceeded by {name} {location}")]
    DepthLimit {
        name: String,
        location: SourceLocation,
        limit: usize,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write output: {source}")]
    Output { source: io::Error },
}

impl IncludeError {
    /// The directive that caused the failure, if it came from one.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            IncludeError::UnresolvedInclude { location, .. }
            | IncludeError::UnreadableInclude { location, .. }
            | IncludeError::CyclicInclude { location, .. }
            | IncludeError::DepthLimit { location, .. } => Some(location),
            _ => None,
        }
    }
}
