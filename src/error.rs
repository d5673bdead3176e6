//! Error types for high-score persistence.
//!
//! None of these are fatal to a running game: callers log them and carry on
//! with a high score of zero or an unsaved record.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ScoreError {
    /// The score file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The score file does not hold a single non-negative integer.
    Parse { path: PathBuf, content: String },

    /// The score file (or its directory) could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Read { path, source } => {
                write!(f, "failed to read high score from {}: {}", path.display(), source)
            }
            ScoreError::Parse { path, content } => write!(
                f,
                "high score file {} does not contain an integer: {:?}",
                path.display(),
                content
            ),
            ScoreError::Write { path, source } => {
                write!(f, "failed to write high score to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreError::Read { source, .. } | ScoreError::Write { source, .. } => Some(source),
            ScoreError::Parse { .. } => None,
        }
    }
}

pub type ScoreResult<T> = Result<T, ScoreError>;
