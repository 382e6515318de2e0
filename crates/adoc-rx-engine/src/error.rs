use thiserror::Error;

/// Failures while building a [`Pattern`](crate::Pattern).
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Failed to compile pattern {source_pattern:?}: {source}")]
    Compile {
        source_pattern: String,
        source: regex::Error,
    },

    #[error("Unknown pattern kind: {0}")]
    UnknownKind(String),
}

/// Failures from match-dependent cursor accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor has been advanced past its last match (or never had one).
    #[error("Cursor position {index} is out of range for {len} matches")]
    OutOfRange { index: usize, len: usize },
}
