pub mod app;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod git;
pub mod history;
pub mod render;
pub mod watch;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use error::HistoryError;
pub use git::GitRepo;
pub use history::{CommitRecord, HistorySource};
pub use render::{HistoryRenderer, link_pull_requests};
pub use watch::{WatchRegistrar, register_watch_paths};
