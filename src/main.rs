use anyhow::Context;
use clap::Parser;

use folio::cli::Cli;
use folio::feed::{GithubSource, ProjectFeed};
use folio::logging::init_tracing;
use folio::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config().context("failed to load configuration")?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let feed = if cli.offline {
        None
    } else {
        let source = GithubSource::new(&config.feed).context("failed to build HTTP client")?;
        tracing::info!(url = source.url(), "Fetching project list");
        Some(ProjectFeed::new(Box::new(source), config.feed.limit))
    };

    runtime::run(config, feed, tokio_runtime.handle()).context("terminal UI failed")?;

    tokio_runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    Ok(())
}
