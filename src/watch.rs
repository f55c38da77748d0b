//! Watch-path registration for live-preview servers.
//!
//! The preview server already watches the documentation sources; this
//! registers the extra directories (hooks, theme overrides) it would
//! otherwise miss. Pure registration, no state, no failure modes of its own.

use crate::config::Config;

use log::debug;
use std::path::{Path, PathBuf};

/// A live-reload collaborator that accepts extra paths to monitor.
pub trait WatchRegistrar {
    fn watch(&mut self, path: &Path);
}

/// Collecting registrar, handy for tests and for drivers that only need
/// the final list.
impl WatchRegistrar for Vec<PathBuf> {
    fn watch(&mut self, path: &Path) {
        self.push(path.to_path_buf());
    }
}

/// Registers every configured extra watch path with the collaborator, once
/// each, in configuration order.
pub fn register_watch_paths<R: WatchRegistrar>(registrar: &mut R, config: &Config) {
    for path in &config.watch_paths {
        debug!("Registering extra watch path: {path}");
        registrar.watch(Path::new(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WATCH_PATHS;

    #[test]
    fn registers_default_paths_in_order() {
        let config = Config::default();
        let mut seen: Vec<PathBuf> = Vec::new();
        register_watch_paths(&mut seen, &config);
        let expected: Vec<PathBuf> = DEFAULT_WATCH_PATHS.iter().map(PathBuf::from).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn registers_each_configured_path_once() {
        let config = Config {
            watch_paths: vec!["theme".to_string(), "snippets".to_string()],
            ..Config::default()
        };
        let mut seen: Vec<PathBuf> = Vec::new();
        register_watch_paths(&mut seen, &config);
        assert_eq!(seen, vec![PathBuf::from("theme"), PathBuf::from("snippets")]);
    }
}
