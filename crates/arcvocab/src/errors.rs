//! # Error Types

use std::path::PathBuf;

/// Errors from arcvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// A corpus source line did not match the expected format.
    #[error("line {line}: {message}")]
    Format {
        /// The 1-based line number of the offending line.
        line: usize,

        /// What was expected, and what was found.
        message: String,
    },

    /// An evaluation corpus names an action the vocabulary has never seen.
    #[error("line {line}: unknown action {action:?} in non-training corpus")]
    UnknownAction {
        /// The 1-based line number of the action.
        line: usize,

        /// The action text.
        action: String,
    },

    /// An error attributed to a specific corpus file.
    #[error("{}: {source}", path.display())]
    InFile {
        /// The file being read.
        path: PathBuf,

        /// The underlying error.
        #[source]
        source: Box<CorpusError>,
    },

    /// The vocabulary snapshot was written by an incompatible version.
    #[error("vocabulary snapshot version {found} is not supported (expected {expected})")]
    SnapshotVersion {
        /// The version recorded in the snapshot.
        found: u32,

        /// The version this build reads and writes.
        expected: u32,
    },

    /// The vocabulary snapshot contents are inconsistent.
    #[error("inconsistent vocabulary snapshot: {0}")]
    SnapshotInconsistent(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CorpusError {
    /// Build a [`CorpusError::Format`] for a line.
    pub fn format<S: Into<String>>(
        line: usize,
        message: S,
    ) -> Self {
        CorpusError::Format {
            line,
            message: message.into(),
        }
    }

    /// Attach a file path to this error.
    pub fn in_file<P: Into<PathBuf>>(
        self,
        path: P,
    ) -> Self {
        CorpusError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with any file attribution removed.
    pub fn root_cause(&self) -> &CorpusError {
        match self {
            CorpusError::InFile { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for arcvocab operations.
pub type CorpusResult<T> = core::result::Result<T, CorpusError>;
