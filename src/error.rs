//! Fatal errors and non-fatal warnings raised while scanning a style tree.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} does not exist")]
    NotFound(PathBuf),

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("{0} is not a file")]
    NotAFile(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("{path}: malformed parameter line: {line}")]
    MalformedParameter { path: PathBuf, line: String },

    #[error("{path}: documentation block is missing required parameter @{name}")]
    MissingRequiredParameter { path: PathBuf, name: &'static str },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Problems that are reported but do not stop the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("{path}: dropped malformed parameter line: {line}")]
    MalformedParameter { path: PathBuf, line: String },

    #[error("{path}: dropped line outside any parameter: {line}")]
    OrphanContinuation { path: PathBuf, line: String },

    #[error("{path}: '{name}' modifies '{parent}', which is not in category '{category}'")]
    MissingReferencedParent {
        path: PathBuf,
        name: String,
        parent: String,
        category: String,
    },

    #[error("{path}: '{name}' has @{param} without a parent name, kept as a top-level record")]
    EmptyParent {
        path: PathBuf,
        name: String,
        param: &'static str,
    },

    #[error("{path}: record has no usable @id, skipped")]
    MissingId { path: PathBuf },

    #[error("{path}: @id '{id}' was already documented, previous entry replaced")]
    DuplicateId { path: PathBuf, id: String },

    #[error("{path}: @markup has no file name, ignored")]
    EmptyMarkup { path: PathBuf },

    #[error("skipped unreadable entry: {message}")]
    Walk { message: String },
}

/// Warnings collected over one run, in the order they were raised.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Append already-logged warnings from another collector.
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}
