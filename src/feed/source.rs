//! Where project records come from.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

use crate::config::FeedConfig;
use crate::feed::error::FeedError;
use crate::feed::record::ProjectRecord;

const AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// A one-shot supplier of project records.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the unsorted record list.
    async fn fetch(&self) -> Result<Vec<ProjectRecord>, FeedError>;
}

/// Lists the public repositories of one GitHub account.
pub struct GithubSource {
    client: Client,
    url: String,
}

impl GithubSource {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            url: repos_url(&config.api_base, &config.owner),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProjectSource for GithubSource {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn fetch(&self) -> Result<Vec<ProjectRecord>, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<ProjectRecord> = serde_json::from_slice(&body)?;
        Ok(records)
    }
}

fn repos_url(api_base: &str, owner: &str) -> String {
    format!("{}/users/{}/repos", api_base.trim_end_matches('/'), owner)
}
