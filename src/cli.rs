use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Terminal portfolio page.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Config file (default: the platform config dir, `folio/config.toml`).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Account whose repositories fill the projects gallery.
    #[arg(long, value_name = "NAME")]
    pub owner: Option<String>,

    /// Repository API root.
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Skip the network and show the built-in projects.
    #[arg(long)]
    pub offline: bool,

    /// Redraw interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(owner) = &self.owner {
            config.feed.owner = owner.clone();
        }
        if let Some(api_base) = &self.api_base {
            config.feed.api_base = api_base.clone();
        }
        if let Some(frame_ms) = self.frame_ms {
            config.animation.frame_ms = frame_ms;
        }
    }
}
