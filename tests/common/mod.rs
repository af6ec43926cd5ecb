//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_github;

use folio::config::{Config, StatSpec};
use folio::ui::app::App;
use folio::ui::clock::ManualClock;
use folio::ui::coordinator::{ViewCoordinator, ViewSettings};
use folio::ui::typewriter::TypewriterTiming;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn stat(id: &str, region: &str, target: u64) -> StatSpec {
    StatSpec {
        id: id.to_string(),
        label: id.to_uppercase(),
        suffix: String::new(),
        region: region.to_string(),
        target,
    }
}

pub fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Settings with short, distinct timings that are easy to reason about.
pub fn settings(phrase_list: &[&str], stats: Vec<StatSpec>) -> ViewSettings {
    ViewSettings {
        phrases: phrases(phrase_list),
        timing: TypewriterTiming {
            type_ms: 100,
            hold_ms: 1500,
            delete_ms: 50,
        },
        regions: phrases(&["hero", "about", "projects", "stats"]),
        visibility_threshold: 0.1,
        stats,
        counter_steps: 200,
        counter_tick_ms: 1,
        slide_count: 3,
        slide_interval_ms: 5000,
    }
}

pub fn mounted_view(settings: ViewSettings, now_ms: u64) -> ViewCoordinator {
    let mut view = ViewCoordinator::new(settings);
    view.mount(now_ms);
    view
}

/// App over the default content, driven by a manual clock.
pub fn test_app() -> (App, Arc<ManualClock>) {
    test_app_with(Config::default())
}

pub fn test_app_with(config: Config) -> (App, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(0));
    let app = App::new(config, Box::new(clock.clone()));
    (app, clock)
}

/// JSON body shaped like the repository listing endpoint.
pub fn repos_body(repos: &[(&str, &str)]) -> String {
    let items: Vec<serde_json::Value> = repos
        .iter()
        .map(|(name, updated_at)| {
            serde_json::json!({
                "id": 1,
                "name": name,
                "description": format!("{name} description"),
                "html_url": format!("https://github.com/someone/{name}"),
                "language": "Rust",
                "topics": ["cli"],
                "updated_at": updated_at,
                "stargazers_count": 0
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
