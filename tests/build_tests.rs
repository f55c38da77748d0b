//! End-to-end docs-tree build: real repository, real renderer, mirrored
//! output tree.

use pagehist::app::build_docs;
use pagehist::{Config, GitRepo};

use std::fs;

#[path = "test_utils.rs"]
mod test_utils;
use test_utils::{commit_file, init_repo, short_hash};

const T0: i64 = 1_700_000_000;

#[test]
fn build_augments_pages_and_mirrors_the_tree() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "docs/index.md", "# Home\n", "Add home page", T0);
    let guide_commit = commit_file(&repo, "docs/guide.md", "# Guide\n", "Add guide (#3)", T0 + 100);
    commit_file(&repo, "docs/style.css", "body {}\n", "Add stylesheet", T0 + 200);

    let config = Config {
        repository_url: "https://github.com/example/docs".to_string(),
        exclude: vec!["index".to_string()],
        ..Config::default()
    };
    let git = GitRepo::discover(dir.path()).expect("repo should be discovered");
    let out = dir.path().join("site");

    let pages = build_docs(&config, &git, &dir.path().join("docs"), &out)
        .expect("build should succeed");
    assert_eq!(pages, 2);

    // Excluded page passes through byte for byte
    let index = fs::read_to_string(out.join("index.md")).expect("index should exist");
    assert_eq!(index, "# Home\n");

    // Augmented page carries heading, commit link, and PR link
    let guide = fs::read_to_string(out.join("guide.md")).expect("guide should exist");
    let hash = short_hash(&repo, guide_commit);
    assert!(guide.starts_with("# Guide\n"));
    assert!(guide.contains("## Page History"));
    assert!(guide.contains(&format!(
        "- [{hash}](https://github.com/example/docs/commit/{hash})"
    )));
    assert!(guide.contains("([#3](https://github.com/example/docs/pull/3))"));

    // Non-markdown files are copied through untouched
    let css = fs::read_to_string(out.join("style.css")).expect("stylesheet should exist");
    assert_eq!(css, "body {}\n");
}

#[test]
fn rebuilding_from_augmented_output_does_not_double_link() {
    let (dir, repo) = init_repo();
    commit_file(&repo, "docs/guide.md", "# Guide\n", "Fix bug (#42)", T0);

    let config = Config {
        repository_url: "https://github.com/example/docs".to_string(),
        ..Config::default()
    };
    let git = GitRepo::discover(dir.path()).expect("repo should be discovered");
    let out = dir.path().join("site");

    build_docs(&config, &git, &dir.path().join("docs"), &out).expect("build should succeed");
    let guide = fs::read_to_string(out.join("guide.md")).expect("guide should exist");

    // The substituted link form no longer matches the bare PR pattern
    assert_eq!(pagehist::link_pull_requests(&guide, &config.repository_url), guide);
}
