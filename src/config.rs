use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use url::Url;

/// Default name of the configuration file, looked up in the current
/// directory when no explicit path is given.
pub const CONFIG_FILE: &str = "pagehist.toml";

/// Heading used when the configuration does not override it.
pub const DEFAULT_HEADING: &str = "## Page History";

/// Extra directories a live-preview watcher should monitor by default.
pub const DEFAULT_WATCH_PATHS: [&str; 2] = ["hooks", "overrides"];

/// Pages that commonly opt out of a history section (the landing page and
/// the version-history page itself). Not applied unless explicitly
/// requested; see [`Config::with_default_exclusions`].
pub const DEFAULT_EXCLUSIONS: [&str; 2] = ["index", "version-history"];

/// Get a configuration value with layered priority: env var > config file value
fn get_layered_value(env_var: &str, file_value: Option<String>) -> Option<String> {
    if let Ok(val) = env::var(env_var) {
        return Some(val);
    }
    file_value
}

/// Configuration structure
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    /// Base URL of the hosting repository, used to build
    /// `<base>/commit/<hash>` and `<base>/pull/<number>` links
    pub repository_url: String,
    /// Section heading placed above the rendered history
    pub heading: String,
    /// Page identifiers for which no history section is generated.
    /// Membership is checked by exact match, never partial.
    pub exclude: Vec<String>,
    /// Extra directories registered with the live-preview watcher
    pub watch_paths: Vec<String>,
    /// Optional cap on the number of rendered commits per page
    pub max_commits: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository_url: String::new(),
            heading: DEFAULT_HEADING.to_string(),
            exclude: Vec::new(),
            watch_paths: DEFAULT_WATCH_PATHS.iter().map(ToString::to_string).collect(),
            max_commits: None,
        }
    }
}

impl Config {
    /// Default configuration with the historical exclusion set applied.
    #[must_use]
    pub fn with_default_exclusions() -> Self {
        Self {
            exclude: DEFAULT_EXCLUSIONS.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Load the configuration with layered priority: env > file > built-in default.
    ///
    /// `path` points at an explicit config file; when `None`, `pagehist.toml`
    /// is read from the current directory if present. A missing file is not
    /// an error, a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        let file_url = std::mem::take(&mut config.repository_url);
        config.repository_url =
            get_layered_value("PAGEHIST_REPOSITORY_URL", Some(file_url)).unwrap_or_default();
        let file_heading = std::mem::take(&mut config.heading);
        config.heading = get_layered_value("PAGEHIST_HEADING", Some(file_heading))
            .unwrap_or_else(|| DEFAULT_HEADING.to_string());

        debug!("Configuration loaded: {config:?}");
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Validate and return the repository base URL.
    pub fn base_url(&self) -> Result<Url> {
        if self.repository_url.is_empty() {
            return Err(anyhow!(
                "No repository URL configured. Set `repository_url` in {CONFIG_FILE} or pass --repo-url."
            ));
        }
        let url = Url::parse(&self.repository_url)
            .map_err(|e| anyhow!("Invalid repository URL '{}': {e}", self.repository_url))?;
        Ok(url)
    }

    /// Check whether a page identifier is in the exclusion set.
    #[must_use]
    pub fn is_excluded(&self, page_id: &str) -> bool {
        self.exclude.iter().any(|p| p == page_id)
    }
}
