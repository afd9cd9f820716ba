//! Quiz error types.
//!
//! Every failure here is terminal: the CLI surfaces it once and exits
//! non-zero. Mid-quiz conditions (timeout, empty answer) are ordinary
//! control flow and never appear in this taxonomy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading problems or running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The problems file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row in the problems file did not decode as `question,answer`.
    #[error("failed to parse problems file: {0}")]
    Parse(#[from] csv::Error),

    /// An I/O failure on the quiz's output sink mid-run.
    #[error("quiz I/O error: {0}")]
    Io(#[from] io::Error),
}
