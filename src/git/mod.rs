// Git module providing the real log-query backend

mod history;
mod repository;

// Re-export primary types for public use
pub use history::commits_for_path;
pub use repository::GitRepo;
