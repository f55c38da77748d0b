//! The log-query capability behind the history renderer.
//!
//! The renderer never talks to Git directly; it goes through [`HistorySource`]
//! so that tests (or other version-control backends) can substitute an
//! in-memory implementation.

use crate::error::HistoryError;

use std::path::Path;

/// One logged change to a page's source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Abbreviated object id, e.g. `abc1234`.
    pub short_hash: String,
    /// Committer date as an ISO calendar date, e.g. `2024-01-01`.
    pub date: String,
    /// Commit summary line. May contain a `(#<digits>)` pull-request reference.
    pub subject: String,
}

impl CommitRecord {
    pub fn new(
        short_hash: impl Into<String>,
        date: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            short_hash: short_hash.into(),
            date: date.into(),
            subject: subject.into(),
        }
    }
}

/// A read-only source of commit history for a file path.
///
/// Implementations must return commits newest first and must not mutate
/// version-control state. Records are fetched fresh on every call; this
/// crate never caches them.
pub trait HistorySource {
    /// Returns every commit that touched `path`, newest first.
    ///
    /// A path with no recorded commits (newly added, untracked) yields an
    /// empty list, not an error.
    fn commits_for(&self, path: &Path) -> Result<Vec<CommitRecord>, HistoryError>;
}

impl<S: HistorySource + ?Sized> HistorySource for &S {
    fn commits_for(&self, path: &Path) -> Result<Vec<CommitRecord>, HistoryError> {
        (**self).commits_for(path)
    }
}
