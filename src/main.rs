use std::sync::Arc;

use anyhow::bail;
use tracing_subscriber::EnvFilter;

use questcrawl::{ConsoleReporter, CrawlConfig, CrawlEngine, HttpFetcher, ThreadRandom};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout is the character sheet.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let Some(start_url) = std::env::args().nth(1) else {
        bail!("usage: questcrawl <start-url>");
    };

    let engine = CrawlEngine::new(
        start_url,
        CrawlConfig::default(),
        Arc::new(HttpFetcher::new()?),
        Box::new(ThreadRandom),
        Arc::new(ConsoleReporter),
    );
    engine.run().await;

    Ok(())
}
