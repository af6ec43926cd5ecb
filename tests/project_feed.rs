//! Tests for loading the projects gallery.

mod common;

use async_trait::async_trait;
use common::mock_github::{MockGithub, MockResponse};
use common::{free_port, repos_body};
use folio::config::FeedConfig;
use folio::feed::{
    fallback_projects, select_recent, FeedError, GithubSource, ProjectFeed, ProjectRecord,
    ProjectSource,
};

fn feed_config(api_base: String) -> FeedConfig {
    FeedConfig {
        owner: "someone".to_string(),
        api_base,
        limit: 6,
        timeout_seconds: 5,
    }
}

fn github_feed(api_base: String) -> ProjectFeed {
    let source = GithubSource::new(&feed_config(api_base)).expect("client");
    ProjectFeed::new(Box::new(source), 6)
}

const EIGHT_REPOS: &[(&str, &str)] = &[
    ("alpha", "2024-03-01T00:00:00Z"),
    ("bravo", "2025-01-15T12:00:00Z"),
    ("charlie", "2023-07-04T08:30:00Z"),
    ("delta", "2025-06-30T23:59:59Z"),
    ("echo", "2024-11-11T11:11:11Z"),
    ("foxtrot", "2022-02-02T02:02:02Z"),
    ("golf", "2025-02-20T10:00:00Z"),
    ("hotel", "2024-08-08T08:08:08Z"),
];

fn names(records: &[ProjectRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

struct FailingSource;

#[async_trait]
impl ProjectSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch(&self) -> Result<Vec<ProjectRecord>, FeedError> {
        Err(FeedError::Status { status: 503 })
    }
}

#[test]
fn select_recent_sorts_newest_first_and_truncates() {
    let records: Vec<ProjectRecord> = serde_json::from_str(&repos_body(EIGHT_REPOS)).unwrap();
    let selected = select_recent(records, 6);
    assert_eq!(
        names(&selected),
        vec!["delta", "golf", "bravo", "echo", "hotel", "alpha"]
    );
}

#[test]
fn select_recent_keeps_short_lists_whole() {
    let records: Vec<ProjectRecord> =
        serde_json::from_str(&repos_body(&EIGHT_REPOS[..2])).unwrap();
    assert_eq!(names(&select_recent(records, 6)), vec!["bravo", "alpha"]);
}

#[tokio::test]
async fn source_error_yields_fallback() {
    let feed = ProjectFeed::new(Box::new(FailingSource), 6);
    assert_eq!(feed.load().await, fallback_projects());
}

#[tokio::test]
async fn fetch_keeps_six_most_recent() {
    let server = MockGithub::start().await;
    server
        .enqueue_response(MockResponse::json(&repos_body(EIGHT_REPOS)))
        .await;

    let projects = github_feed(server.base_url()).load().await;
    assert_eq!(
        names(&projects),
        vec!["delta", "golf", "bravo", "echo", "hotel", "alpha"]
    );
}

#[tokio::test]
async fn request_targets_owner_repos_with_user_agent() {
    let server = MockGithub::start().await;
    server.enqueue_response(MockResponse::json("[]")).await;

    let projects = github_feed(format!("{}/", server.base_url())).load().await;
    assert!(projects.is_empty());

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users/someone/repos");
    assert!(requests[0]
        .header("user-agent")
        .is_some_and(|agent| agent.starts_with("folio/")));
    assert_eq!(
        requests[0].header("accept"),
        Some("application/vnd.github+json")
    );
}

#[tokio::test]
async fn error_status_yields_fallback() {
    let server = MockGithub::start().await;
    server
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;

    let projects = github_feed(server.base_url()).load().await;
    assert_eq!(projects, fallback_projects());
}

#[tokio::test]
async fn rate_limit_surfaces_as_status_error() {
    let server = MockGithub::start().await;
    server
        .enqueue_response(MockResponse::error(403, "API rate limit exceeded"))
        .await;

    let source = GithubSource::new(&feed_config(server.base_url())).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Status { status: 403 }));
}

#[tokio::test]
async fn malformed_body_is_rejected_and_replaced() {
    let server = MockGithub::start().await;
    server
        .enqueue_response(MockResponse::json(r#"{"message": "not a list"}"#))
        .await;

    let source = GithubSource::new(&feed_config(server.base_url())).unwrap();
    assert!(matches!(
        source.fetch().await,
        Err(FeedError::Malformed(_))
    ));

    server
        .enqueue_response(MockResponse::json("<html>"))
        .await;
    assert_eq!(
        github_feed(server.base_url()).load().await,
        fallback_projects()
    );
}

#[tokio::test]
async fn unreachable_host_yields_fallback() {
    let base = format!("http://127.0.0.1:{}", free_port());

    let source = GithubSource::new(&feed_config(base.clone())).unwrap();
    assert!(matches!(source.fetch().await, Err(FeedError::Request(_))));

    assert_eq!(github_feed(base).load().await, fallback_projects());
}

#[tokio::test]
async fn timeout_yields_fallback() {
    let server = MockGithub::start().await;
    server
        .enqueue_response(MockResponse::json("[]").with_delay(3_000))
        .await;

    let mut config = feed_config(server.base_url());
    config.timeout_seconds = 1;
    let feed = ProjectFeed::new(Box::new(GithubSource::new(&config).unwrap()), 6);
    assert_eq!(feed.load().await, fallback_projects());
}

#[test]
fn fallback_records_match_built_in_gallery() {
    let fallback = fallback_projects();
    assert_eq!(names(&fallback), vec!["Portfolio Website", "E-commerce App"]);
    assert_eq!(
        fallback[0].leading_topics(3).to_vec(),
        vec!["react", "tailwind", "portfolio"]
    );
    assert_eq!(fallback[1].language.as_deref(), Some("React"));
}
