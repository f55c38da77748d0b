//! The History Renderer.
//!
//! Turns the commit log of a page's source file into a markdown fragment:
//! a configured heading followed by one bullet per commit, newest first,
//! with the hash linked to `<base>/commit/<hash>` and any `(#123)`
//! pull-request reference in the subject linked to `<base>/pull/123`.

use crate::config::Config;
use crate::error::HistoryError;
use crate::history::{CommitRecord, HistorySource};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;
use std::path::Path;

/// Matches a parenthesized pull-request reference such as `(#42)`.
///
/// The substituted markdown-link form `([#42](...))` no longer matches,
/// which is what makes the substitution idempotent.
static PR_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(#(\d+)\)").expect("PR reference pattern should compile")
});

/// Renders page-history fragments from an injected log-query source.
///
/// Holds no cross-call state; every render queries the source afresh, so
/// callers may parallelize page renders if they wish.
pub struct HistoryRenderer<'a, S: HistorySource> {
    config: &'a Config,
    source: S,
}

impl<'a, S: HistorySource> HistoryRenderer<'a, S> {
    pub fn new(config: &'a Config, source: S) -> Self {
        Self { config, source }
    }

    /// Renders the history fragment for one page.
    ///
    /// Returns `Ok(None)` when the page identifier is in the exclusion set.
    /// A page with zero commits yields a fragment containing only the
    /// heading, not an error.
    pub fn render_history(
        &self,
        page_id: &str,
        source_path: &Path,
    ) -> Result<Option<String>, HistoryError> {
        if self.config.is_excluded(page_id) {
            debug!("Page '{page_id}' is excluded, skipping history");
            return Ok(None);
        }

        let commits = self.source.commits_for(source_path)?;
        debug!("Rendering {} commits for page '{page_id}'", commits.len());
        Ok(Some(self.render_fragment(&commits)))
    }

    /// Appends the history fragment to a page's markdown.
    ///
    /// Excluded pages come back unchanged; everything else gains the
    /// fragment after the existing content.
    pub fn append_history(
        &self,
        markdown: &str,
        page_id: &str,
        source_path: &Path,
    ) -> Result<String, HistoryError> {
        match self.render_history(page_id, source_path)? {
            Some(fragment) => Ok(format!("{markdown}{fragment}")),
            None => Ok(markdown.to_string()),
        }
    }

    /// Assembles the fragment: heading, then one bullet per commit in the
    /// order the query returned them.
    fn render_fragment(&self, commits: &[CommitRecord]) -> String {
        let mut fragment = format!("\n\n{}\n", self.config.heading);
        for commit in commits {
            let line = self.render_bullet(commit);
            write!(fragment, "\n{line}").expect("write to string should not fail");
        }
        fragment.push('\n');
        fragment
    }

    /// One commit as a markdown bullet. The hash value is never altered,
    /// only wrapped in a link.
    fn render_bullet(&self, commit: &CommitRecord) -> String {
        let base = self.config.repository_url.trim_end_matches('/');
        let hash = &commit.short_hash;
        let subject = link_pull_requests(&commit.subject, base);
        format!("- [{hash}]({base}/commit/{hash}) {} {subject}", commit.date)
    }
}

/// Replaces every `(#123)` in `subject` with `([#123](<base>/pull/123))`,
/// preserving the display text and the surrounding parentheses.
///
/// Idempotent: running it over already-substituted text is a no-op because
/// the link form no longer contains a `(#` immediately followed by digits
/// and a closing parenthesis.
pub fn link_pull_requests(subject: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    PR_REFERENCE
        .replace_all(subject, |caps: &regex::Captures<'_>| {
            let number = &caps[1];
            format!("([#{number}]({base}/pull/{number}))")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com/example/docs";

    #[test]
    fn links_pr_reference_preserving_parentheses() {
        let linked = link_pull_requests("Fix bug (#42)", BASE);
        assert_eq!(
            linked,
            "Fix bug ([#42](https://github.com/example/docs/pull/42))"
        );
    }

    #[test]
    fn links_every_pr_reference() {
        let linked = link_pull_requests("Merge (#1) and (#23)", BASE);
        assert_eq!(
            linked,
            "Merge ([#1](https://github.com/example/docs/pull/1)) \
             and ([#23](https://github.com/example/docs/pull/23))"
        );
    }

    #[test]
    fn pr_linking_is_idempotent() {
        let once = link_pull_requests("Fix bug (#42)", BASE);
        let twice = link_pull_requests(&once, BASE);
        assert_eq!(once, twice);
    }

    #[test]
    fn leaves_non_reference_parentheticals_alone() {
        for subject in ["No refs here", "Almost (#) a ref", "(42)", "(# 42)"] {
            assert_eq!(link_pull_requests(subject, BASE), subject);
        }
    }
}
