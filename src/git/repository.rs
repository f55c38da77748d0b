use crate::error::HistoryError;
use crate::history::{CommitRecord, HistorySource};

use git2::Repository;
use log::debug;
use std::path::{Path, PathBuf};

use super::history::commits_for_path;

/// Represents a Git repository and provides read-only access to its history.
pub struct GitRepo {
    repo_path: PathBuf,
    /// Optional cap on the number of commits returned per query
    max_commits: Option<usize>,
}

impl GitRepo {
    /// Creates a new `GitRepo` instance from a repository path.
    pub fn new(repo_path: &Path) -> Self {
        Self {
            repo_path: repo_path.to_path_buf(),
            max_commits: None,
        }
    }

    /// Discovers the repository containing `path` and returns a `GitRepo`
    /// rooted at its work tree.
    pub fn discover(path: &Path) -> Result<Self, HistoryError> {
        let repo = Repository::discover(path)?;
        let workdir = repo.workdir().ok_or_else(|| {
            HistoryError::UnexpectedFormat("repository has no working directory".to_string())
        })?;
        debug!("Discovered repository at {}", workdir.display());
        Ok(Self::new(workdir))
    }

    /// Limit history queries to the `max` most recent matching commits.
    #[must_use]
    pub fn with_max_commits(mut self, max: Option<usize>) -> Self {
        self.max_commits = max;
        self
    }

    /// Open the repository at the stored path
    pub fn open_repo(&self) -> Result<Repository, git2::Error> {
        Repository::open(&self.repo_path)
    }

    /// Returns the repository path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Rewrites `path` relative to the repository work tree, the form the
    /// revwalk diff filter expects. Both sides are canonicalized first so
    /// relative inputs and symlinked temp directories resolve the same way;
    /// paths already relative to the work tree pass through.
    pub fn relativize(&self, path: &Path) -> PathBuf {
        let root = self
            .repo_path
            .canonicalize()
            .unwrap_or_else(|_| self.repo_path.clone());
        let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        match absolute.strip_prefix(&root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => path.to_path_buf(),
        }
    }
}

impl HistorySource for GitRepo {
    fn commits_for(&self, path: &Path) -> Result<Vec<CommitRecord>, HistoryError> {
        let repo = self.open_repo()?;
        let rel_path = self.relativize(path);
        commits_for_path(&repo, &rel_path, self.max_commits)
    }
}
