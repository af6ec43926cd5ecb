use thiserror::Error;

/// Ways the project list can be unavailable.
///
/// Every variant is handled the same way by [`ProjectFeed`](super::ProjectFeed):
/// the gallery falls back to the built-in records.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure, timeout, or client construction failure.
    #[error("Request to project list failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Project list returned status {status}")]
    Status { status: u16 },

    /// The body was not a list of repositories.
    #[error("Malformed project list: {0}")]
    Malformed(#[from] serde_json::Error),
}
