//! Projects gallery data.
//!
//! The gallery is filled once per session. A successful fetch is sorted
//! newest first and truncated; any failure swaps in the built-in records.

mod error;
mod record;
mod source;

pub use error::FeedError;
pub use record::{fallback_projects, ProjectRecord};
pub use source::{GithubSource, ProjectSource};

/// Single-attempt loader over a [`ProjectSource`].
pub struct ProjectFeed {
    source: Box<dyn ProjectSource>,
    limit: usize,
}

impl ProjectFeed {
    pub fn new(source: Box<dyn ProjectSource>, limit: usize) -> Self {
        Self { source, limit }
    }

    /// Fetch once and return the gallery list.
    ///
    /// Never fails: errors are logged and replaced by [`fallback_projects`].
    pub async fn load(&self) -> Vec<ProjectRecord> {
        match self.source.fetch().await {
            Ok(records) => {
                let fetched = records.len();
                let projects = select_recent(records, self.limit);
                tracing::info!(
                    source = self.source.name(),
                    fetched,
                    kept = projects.len(),
                    "Loaded project list"
                );
                projects
            }
            Err(err) => {
                tracing::warn!(
                    source = self.source.name(),
                    error = %err,
                    "Project list unavailable, using fallback"
                );
                fallback_projects()
            }
        }
    }
}

/// Sort newest first by `updated_at` and keep the first `limit`.
pub fn select_recent(mut records: Vec<ProjectRecord>, limit: usize) -> Vec<ProjectRecord> {
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    records.truncate(limit);
    records
}
