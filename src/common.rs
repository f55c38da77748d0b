use crate::config::Config;

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Default)]
pub struct CommonParams {
    /// Path to the configuration file
    #[arg(short, long, help = "Path to the configuration file")]
    pub config: Option<PathBuf>,

    /// Override the configured repository base URL
    #[arg(long = "repo-url", help = "Override the configured repository base URL")]
    pub repository_url: Option<String>,

    /// Override the configured section heading
    #[arg(long, help = "Override the configured section heading")]
    pub heading: Option<String>,

    /// Exclude a page identifier (repeatable); added to the configured set
    #[arg(
        short = 'x',
        long = "exclude",
        help = "Exclude a page identifier (repeatable)"
    )]
    pub exclude: Vec<String>,

    /// Cap the number of rendered commits per page
    #[arg(long, help = "Cap the number of rendered commits per page")]
    pub max_commits: Option<usize>,
}

impl CommonParams {
    /// Loads the configuration and applies these overrides on top of it.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        self.apply_to_config(&mut config);
        Ok(config)
    }

    /// Applies CLI overrides to an already-loaded configuration.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(url) = &self.repository_url {
            config.repository_url.clone_from(url);
        }
        if let Some(heading) = &self.heading {
            config.heading.clone_from(heading);
        }
        for page_id in &self.exclude {
            if !config.is_excluded(page_id) {
                config.exclude.push(page_id.clone());
            }
        }
        if self.max_commits.is_some() {
            config.max_commits = self.max_commits;
        }
    }
}
