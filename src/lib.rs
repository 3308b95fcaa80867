//! CRC Documentation MCP Service
//!
//! This crate provides an MCP (Model Context Protocol) service answering
//! questions about CRC (CodeReady Containers) and OpenShift Local from a
//! fixed set of documentation sites. Pages are fetched over HTTP, reduced to
//! plain text, cached per source, and searched with a simple keyword
//! relevance ranking.
//!
//! # Features
//!
//! - Fetch documentation pages from crc.dev
//! - Strip HTML down to readable text
//! - Cache extracted text per source until explicitly cleared
//! - Rank sentence fragments against free-text queries
//! - MCP tools (`crc_doc_query`, `clear_cache`) over SSE or stdio
//!
//! # Modules
//!
//! - [`sources`]: source registry and HTTP fetching
//! - [`extract`]: HTML to plain-text extraction
//! - [`cache`]: per-source document cache
//! - [`ranker`]: keyword relevance ranking
//! - [`mcp`]: MCP server implementation and tool handling
//! - [`server`]: SSE/stdio transport startup

pub mod cache;
pub mod extract;
pub mod mcp;
pub mod ranker;
pub mod server;
pub mod sources;
