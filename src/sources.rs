//! Documentation source registry and HTTP fetching.
//!
//! The registry is a fixed, ordered table of documentation sites; changing it
//! means redeploying, there is no runtime registration. The fetcher owns the
//! process-wide HTTP client and performs exactly one GET attempt per request,
//! converting every failure into a human-readable message for the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::extract::extract_text;

/// Combined connect+read timeout for a single fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("Failed to fetch {url} (Status: {status})")]
    Status { url: Url, status: u16 },

    #[error("Error fetching {url}: {source}")]
    Transport { url: Url, source: reqwest::Error },
}

/// Ordered, immutable mapping from source identifier to documentation URL.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    entries: Vec<(String, Url)>,
}

impl SourceRegistry {
    pub fn new(entries: Vec<(String, Url)>) -> Self {
        Self { entries }
    }

    pub fn url(&self, name: &str) -> Option<&Url> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, url)| url)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.url(name).is_some()
    }

    /// Source identifiers in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Default for SourceRegistry {
    /// The three CRC documentation sites: primary docs, blog, engineering docs.
    fn default() -> Self {
        let entries = [
            ("crc", "https://crc.dev/docs"),
            ("crc-blog", "https://crc.dev/blog"),
            ("crc-dev", "https://crc.dev/engineering-docs"),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(name, url)| {
                    (
                        name.to_string(),
                        Url::parse(url).expect("static source URL is valid"),
                    )
                })
                .collect(),
        )
    }
}

/// Fetches and extracts documentation text for registered sources.
///
/// Holds the shared HTTP client for the whole process; construct once at
/// startup and clone the `Arc` into each consumer. The client (and its
/// connection pool) is released when the last handle drops at shutdown.
pub struct SourceFetcher {
    client: Client,
    registry: Arc<SourceRegistry>,
}

impl SourceFetcher {
    pub fn new(registry: Arc<SourceRegistry>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client, registry })
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Fetches a source and returns its extracted text, with any failure
    /// rendered as the message the end user sees. Transport failures are
    /// additionally logged. Never errors; no retries.
    pub async fn fetch_text(&self, source: &str) -> String {
        match self.fetch(source).await {
            Ok(text) => text,
            Err(err) => {
                if matches!(err, FetchError::Transport { .. }) {
                    tracing::error!("{err}");
                }
                err.to_string()
            }
        }
    }

    /// Single-attempt fetch: GET the registered URL, require status 200, run
    /// the body through text extraction.
    pub async fn fetch(&self, source: &str) -> Result<String, FetchError> {
        let url = self
            .registry
            .url(source)
            .ok_or_else(|| FetchError::UnknownSource(source.to_string()))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;

        Ok(extract_text(&body))
    }
}
