//! Server startup for the SSE and stdio transports.
//!
//! Both entry points build the shared service state once (source registry,
//! HTTP client, document cache) and hand clones of the [`DocServer`] to the
//! transport. Dropping that state on shutdown releases the HTTP connection
//! pool.

use rmcp::transport::sse_server::SseServer;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cache::InMemoryCache;
use crate::mcp::DocServer;
use crate::sources::{SourceFetcher, SourceRegistry};

fn build_service() -> anyhow::Result<DocServer> {
    let registry = Arc::new(SourceRegistry::default());
    let fetcher = Arc::new(SourceFetcher::new(registry)?);
    let cache = Arc::new(InMemoryCache::new());
    Ok(DocServer::new(fetcher, cache))
}

// start sse server
pub async fn start_sse_server(addr: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = build_service()?;
    let ct = SseServer::serve(addr.parse()?)
        .await?
        .with_service(move || service.clone());

    tracing::info!("CRC documentation server listening on {addr}");

    tokio::signal::ctrl_c().await?;
    ct.cancel();
    Ok(())
}

// start stdio server
pub async fn start_stdio_server() -> anyhow::Result<()> {
    // Log to stderr so stdout stays clean for the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting CRC documentation MCP server");

    let service = build_service()?.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}
