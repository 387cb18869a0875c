use std::path::PathBuf;

/// A convenience `Result` type for steward operations.
pub type Result<T> = std::result::Result<T, StewardError>;

/// Errors that can abort a run. All of them are fatal: the pipeline never
/// reports partial results and never retries a git invocation.
#[derive(Debug, thiserror::Error)]
pub enum StewardError {
    /// The git binary could not be spawned, or exited non-zero.
    #[error("git invocation failed: {0}")]
    GitInvocation(String),

    /// A git subprocess outlived its wall-clock deadline and was killed.
    #[error("git {command} timed out after {seconds}s")]
    GitTimeout { command: String, seconds: u64 },

    /// A commit paragraph in the history stream had missing or non-numeric
    /// numstat fields. Parsing past it would silently skew the aggregates.
    #[error("malformed history record: {0}")]
    MalformedHistory(String),

    /// A share total came out zero — nothing to divide by, nothing to rank.
    #[error("no {0} found for the given path")]
    NoData(&'static str),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
