use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use cse_search::api::create_router;
use cse_search::config::Config;
use cse_search::searcher::Searcher;

/// Google Custom Search proxy with optional page text enrichment.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Address to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let addr = format!("{}:{}", config.host, config.port);
    let searcher = Arc::new(Searcher::new(config).context("Failed to create HTTP clients")?);
    let app = create_router(searcher);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
