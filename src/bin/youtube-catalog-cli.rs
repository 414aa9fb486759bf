use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_catalog_provider::{CatalogProvider, FetchFilters, ProviderConfig, YouTubeProvider};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "provider.json".to_string());
    let config = tokio::fs::read_to_string(&config_path)
        .await
        .with_context(|| format!("read provider configuration from {config_path}"))?;
    let config: ProviderConfig =
        serde_json::from_str(&config).context("parse provider configuration")?;

    let provider = YouTubeProvider::new(config).context("construct provider")?;

    // for testing
    let page = provider
        .fetch(FetchFilters::default())
        .await
        .context("fetch first catalog page")?;
    eprintln!(
        "==> {} document(s), has_more: {}",
        page.results.len(),
        page.has_more
    );
    println!("{}", serde_json::to_string_pretty(&page.results)?);

    if let Some(first) = page.results.into_iter().next() {
        let id = first.id.clone();
        eprintln!("==> detail for {id}");
        let detail = provider
            .detail(&id, first)
            .await
            .context("fetch show detail")?;
        println!("{}", serde_json::to_string_pretty(&detail)?);
    }

    Ok(())
}
