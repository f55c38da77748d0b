//! Commit-log queries for page source files.
//!
//! Walks history newest first and keeps the commits whose first-parent diff
//! touched the file in question, the moral equivalent of
//! `git log -- <path>`.

use crate::error::HistoryError;
use crate::history::CommitRecord;

use chrono::{DateTime, FixedOffset};
use git2::{Commit, Repository};
use log::debug;
use std::path::Path;

/// Retrieves every commit that touched `rel_path`, newest first.
///
/// `rel_path` is relative to the repository work tree. A repository with no
/// HEAD (freshly initialized) or a path no commit ever touched yields an
/// empty history rather than an error. Passing `max` caps the result at the
/// `max` most recent matches.
pub fn commits_for_path(
    repo: &Repository,
    rel_path: &Path,
    max: Option<usize>,
) -> Result<Vec<CommitRecord>, HistoryError> {
    debug!("Fetching history for {}", rel_path.display());
    let mut revwalk = repo.revwalk()?;

    // For fresh repos with no commits, push_head() will fail
    if revwalk.push_head().is_err() {
        debug!("No HEAD found (fresh repository), returning empty history");
        return Ok(Vec::new());
    }
    revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

    let mut records = Vec::new();
    for oid_result in revwalk {
        if let Some(max) = max {
            if records.len() >= max {
                break;
            }
        }

        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;

        if commit_touches_path(repo, &commit, rel_path)? {
            records.push(record_for_commit(repo, &commit)?);
        }
    }

    debug!(
        "Found {} commits touching {}",
        records.len(),
        rel_path.display()
    );
    Ok(records)
}

/// Checks if a commit's first-parent diff touches the given path
fn commit_touches_path(
    repo: &Repository,
    commit: &Commit,
    rel_path: &Path,
) -> Result<bool, HistoryError> {
    let commit_tree = commit.tree()?;
    let parent_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };

    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), None)?;

    for delta in diff.deltas() {
        // new_file covers added/modified/renamed-to, old_file the other side
        if delta.new_file().path() == Some(rel_path) || delta.old_file().path() == Some(rel_path) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Builds the record the renderer consumes: abbreviated id, committer date
/// as a calendar day, summary line.
fn record_for_commit(repo: &Repository, commit: &Commit) -> Result<CommitRecord, HistoryError> {
    let short_id = repo.find_object(commit.id(), None)?.short_id()?;
    let short_hash = short_id
        .as_str()
        .ok_or_else(|| {
            HistoryError::UnexpectedFormat(format!("non-UTF-8 short id for commit {}", commit.id()))
        })?
        .to_string();

    let subject = commit
        .summary()
        .ok_or_else(|| {
            HistoryError::UnexpectedFormat(format!("commit {} has no summary line", commit.id()))
        })?
        .to_string();

    Ok(CommitRecord {
        short_hash,
        date: commit_date(commit),
        subject,
    })
}

/// Formats the committer time as `YYYY-MM-DD` in the committer's offset.
fn commit_date(commit: &Commit) -> String {
    let time = commit.time();
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60);
    match (DateTime::from_timestamp(time.seconds(), 0), offset) {
        (Some(utc), Some(offset)) => utc.with_timezone(&offset).format("%Y-%m-%d").to_string(),
        (Some(utc), None) => utc.format("%Y-%m-%d").to_string(),
        (None, _) => String::from("unknown-date"),
    }
}
