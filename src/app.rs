//! Command handlers wiring the CLI to the renderer.

use crate::cli::Commands;
use crate::common::CommonParams;
use crate::config::Config;
use crate::git::GitRepo;
use crate::render::HistoryRenderer;
use crate::watch::register_watch_paths;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle the command based on parsed arguments
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Page {
            common,
            file,
            page_id,
        } => handle_page(&common, &file, page_id.as_deref()),
        Commands::Build {
            common,
            source,
            out,
        } => handle_build(&common, &source, &out),
        Commands::WatchPaths { common } => handle_watch_paths(&common),
    }
}

/// Handle the `page` command: augment one page and print it.
pub fn handle_page(common: &CommonParams, file: &Path, page_id: Option<&str>) -> Result<()> {
    debug!("Handling 'page' command for {}", file.display());
    let config = common.load_config()?;
    config.base_url()?;

    let repo = open_repo_for(&config, file)?;
    let markdown = fs::read_to_string(file)
        .with_context(|| format!("Failed to read page {}", file.display()))?;

    let page_id = match page_id {
        Some(id) => id.to_string(),
        None => page_id_for(file)?,
    };

    let renderer = HistoryRenderer::new(&config, repo);
    let augmented = renderer.append_history(&markdown, &page_id, file)?;
    print!("{augmented}");
    Ok(())
}

/// Handle the `build` command: augment a whole docs tree.
pub fn handle_build(common: &CommonParams, source: &Path, out: &Path) -> Result<()> {
    debug!(
        "Handling 'build' command: {} -> {}",
        source.display(),
        out.display()
    );
    let config = common.load_config()?;
    config.base_url()?;

    let repo = open_repo_for(&config, source)?;
    let pages = build_docs(&config, &repo, source, out)?;
    debug!("Augmented {pages} pages");
    Ok(())
}

/// Handle the `watch-paths` command: print one registered path per line.
pub fn handle_watch_paths(common: &CommonParams) -> Result<()> {
    let config = common.load_config()?;
    let mut paths: Vec<PathBuf> = Vec::new();
    register_watch_paths(&mut paths, &config);
    for path in paths {
        println!("{}", path.display());
    }
    Ok(())
}

/// Walks `source`, appends a history section to every markdown page, and
/// writes the mirrored tree under `out`. Non-markdown files are copied
/// through untouched. Returns the number of markdown pages processed,
/// excluded ones included.
pub fn build_docs(config: &Config, repo: &GitRepo, source: &Path, out: &Path) -> Result<usize> {
    let renderer = HistoryRenderer::new(config, repo);
    let mut pages = 0;

    for entry in WalkBuilder::new(source).build() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let rel = path
            .strip_prefix(source)
            .with_context(|| format!("Walked outside the source tree: {}", path.display()))?;
        let target = out.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        if path.extension().is_some_and(|ext| ext == "md") {
            let markdown = fs::read_to_string(path)
                .with_context(|| format!("Failed to read page {}", path.display()))?;
            let page_id = page_id_for(path)?;
            let augmented = renderer.append_history(&markdown, &page_id, path)?;
            fs::write(&target, augmented)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            pages += 1;
        } else {
            fs::copy(path, &target)
                .with_context(|| format!("Failed to copy {}", path.display()))?;
        }
    }

    Ok(pages)
}

/// Derives the page identifier from the source file: its stem, e.g.
/// `docs/guide/setup.md` -> `setup`.
fn page_id_for(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Page path has no usable file stem: {}", path.display()))?;
    Ok(stem.to_string())
}

/// Opens the repository containing `path`, honoring the configured commit cap.
fn open_repo_for(config: &Config, path: &Path) -> Result<GitRepo> {
    let anchor = if path.is_dir() {
        path.to_path_buf()
    } else {
        match path.parent() {
            // A bare file name has an empty parent; anchor at the cwd instead
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };
    let repo = GitRepo::discover(&anchor)
        .with_context(|| format!("{} is not inside a Git repository", path.display()))?;
    Ok(repo.with_max_commits(config.max_commits))
}
