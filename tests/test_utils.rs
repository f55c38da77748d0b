//! Shared fixtures: throwaway Git repositories with programmatic commits,
//! so tests never depend on a system `git` binary or wall-clock time.
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Initializes an empty repository in a temporary directory.
pub fn init_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().expect("temp dir should be created");
    let repo = Repository::init(dir.path()).expect("repository should initialize");
    (dir, repo)
}

/// Writes `content` to `rel_path` inside the work tree and commits it.
///
/// `when` is the commit timestamp in epoch seconds; callers pass increasing
/// values so newest-first ordering is deterministic.
pub fn commit_file(
    repo: &Repository,
    rel_path: &str,
    content: &str,
    message: &str,
    when: i64,
) -> Oid {
    let workdir = repo.workdir().expect("test repository should have a work tree");
    let file_path = workdir.join(rel_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("page directory should be created");
    }
    fs::write(&file_path, content).expect("page file should be written");

    let mut index = repo.index().expect("index should open");
    index
        .add_path(Path::new(rel_path))
        .expect("path should be staged");
    index.write().expect("index should write");
    let tree_id = index.write_tree().expect("tree should write");
    let tree = repo.find_tree(tree_id).expect("tree should exist");

    let sig = Signature::new("Doc Author", "docs@example.com", &Time::new(when, 0))
        .expect("signature should be valid");

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("commit should succeed")
}

/// The abbreviated id the renderer will see for `oid`.
pub fn short_hash(repo: &Repository, oid: Oid) -> String {
    repo.find_object(oid, None)
        .expect("object should exist")
        .short_id()
        .expect("short id should resolve")
        .as_str()
        .expect("short id should be UTF-8")
        .to_string()
}
