use thiserror::Error;

/// Errors produced while querying or rendering page history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The log query could not run, or the path is not under version control.
    #[error("git history query failed: {0}")]
    Query(#[from] git2::Error),

    /// The log output did not match the shape the renderer relies on.
    #[error("unexpected log output: {0}")]
    UnexpectedFormat(String),
}
