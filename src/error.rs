//! Error types for `reverse` operations.
//!
//! Every variant is fatal. The `Display` output of each variant is the exact
//! message printed to standard error before the process exits with status 1.

use std::collections::TryReserveError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for `reverse` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions that abort an invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of positional arguments, or an unrecognized option.
    #[error("usage: reverse <input> <output>")]
    Usage,

    /// Input and output name the same file, literally or by identity.
    #[error("reverse: input and output file must differ")]
    SameFile,

    /// A named file could not be opened in the requested mode.
    #[error("reverse: cannot open file '{}'", path.display())]
    Open {
        /// Path exactly as it was given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Memory for a line or for the line store could not be reserved.
    #[error("malloc failed")]
    Allocation(#[from] TryReserveError),
}

impl Error {
    /// Builds an [`Error::Open`] for `path`.
    pub fn open(path: &Path, source: std::io::Error) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            source,
        }
    }
}
