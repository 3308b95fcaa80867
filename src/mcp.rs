//! CRC documentation MCP implementation.
//!
//! This module exposes the documentation pipeline as MCP tools. A query walks
//! each requested source through cache lookup (fetching and extracting on a
//! miss), ranks the cached text against the query terms, and renders a
//! Markdown report over every source that produced relevant sections.
//!
//! # Main Components
//!
//! - [`DocServer`]: tool struct owning the fetcher and cache
//! - `crc_doc_query`: search the documentation sources for a free-text query
//! - `clear_cache`: drop all cached documentation

use rmcp::model::{
    Implementation, ListPromptsResult, PaginatedRequestParam, ProtocolVersion, ServerCapabilities,
};
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler, model::ServerInfo, tool};
use rmcp::{
    model::{Content, IntoContents},
    schemars,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cache::{Cache, InMemoryCache};
use crate::ranker::find_relevant_sections;
use crate::sources::SourceFetcher;

/// Text returned to the MCP caller by every tool.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ToolReply {
    pub content: String,
}

impl IntoContents for ToolReply {
    fn into_contents(self) -> Vec<Content> {
        vec![Content::text(self.content)]
    }
}

impl From<String> for ToolReply {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl From<&str> for ToolReply {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

/// Relevant sections found in one documentation source.
struct SourceResult<'a> {
    source: &'a str,
    url: String,
    sections: Vec<String>,
}

/// MCP server answering questions from the CRC documentation sites.
///
/// Owns the shared fetcher (HTTP client + source registry) and the
/// per-process document cache; cloning shares both.
#[derive(Clone)]
pub struct DocServer {
    fetcher: Arc<SourceFetcher>,
    cache: Arc<InMemoryCache>,
}

#[tool(tool_box)]
impl DocServer {
    pub fn new(fetcher: Arc<SourceFetcher>, cache: Arc<InMemoryCache>) -> Self {
        Self { fetcher, cache }
    }

    /// Returns the cached text for a source, fetching and caching on a miss.
    /// Fetch failures come back (and are cached) as their message text.
    async fn cached_content(&self, source: &str) -> String {
        if let Some(content) = self.cache.get(source).await {
            tracing::debug!("Cache hit for {source}");
            return content;
        }
        tracing::info!("Fetching documentation from {source}");
        let content = self.fetcher.fetch_text(source).await;
        self.cache.insert(source.to_string(), content.clone()).await;
        content
    }

    #[tool(
        description = "Answer questions about CRC (CodeReady Containers) or OpenShift Local using documentation, blogs, and engineering content."
    )]
    async fn crc_doc_query(
        &self,
        #[tool(param)]
        #[schemars(description = "Query about CRC or OpenShift Local")]
        query: String,

        #[tool(param)]
        #[schemars(description = "Specific doc sources to search (optional, defaults to all)")]
        sources: Option<Vec<String>>,
    ) -> ToolReply {
        if query.is_empty() {
            return ToolReply::from("Please provide a query.");
        }

        let registry = self.fetcher.registry();
        let targets: Vec<String> = match sources {
            Some(sources) => sources,
            None => registry.names().map(str::to_string).collect(),
        };

        let mut results = Vec::new();
        for source in &targets {
            // Unregistered identifiers are skipped, not reported.
            let Some(url) = registry.url(source) else {
                continue;
            };

            let content = self.cached_content(source).await;
            let sections = find_relevant_sections(&content, &query);

            if !sections.is_empty() {
                results.push(SourceResult {
                    source,
                    url: url.to_string(),
                    sections,
                });
            }
        }

        if results.is_empty() {
            return ToolReply::from(format!("No relevant information found for: '{query}'"));
        }

        ToolReply::from(render_report(&query, &results))
    }

    #[tool(description = "Clear the documentation cache to fetch fresh content")]
    async fn clear_cache(&self) -> ToolReply {
        self.cache.clear().await;
        tracing::info!("Documentation cache cleared");
        ToolReply::from("Documentation cache cleared. Fresh content will be fetched on next query.")
    }
}

/// Renders the per-source results as a Markdown report.
fn render_report(query: &str, results: &[SourceResult<'_>]) -> String {
    let mut report = format!("# CRC Documentation Results\n\n**Query:** {query}\n\n");

    for result in results {
        report.push_str(&format!("## {}\n", heading_for(result.source)));
        report.push_str(&format!("**Source:** {}\n\n", result.url));

        for (i, section) in result.sections.iter().enumerate() {
            report.push_str(&format!("**{}.** {}\n\n", i + 1, section));
        }

        report.push_str("---\n\n");
    }

    report
}

/// Section heading for a source identifier: hyphens become spaces, each word
/// is title-cased ("crc-blog" -> "Crc Blog").
fn heading_for(source: &str) -> String {
    source
        .replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[tool(tool_box)]
impl ServerHandler for DocServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools() // We only need tools capability
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "This server answers questions about CRC (CodeReady Containers) and \
                OpenShift Local. Use the 'crc_doc_query' tool with a free-text query and \
                optionally a list of sources ('crc', 'crc-blog', 'crc-dev'). Fetched \
                documentation is cached; use 'clear_cache' to force fresh content."
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: PaginatedRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        // We don't use prompts in this implementation
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: vec![],
        })
    }
}
