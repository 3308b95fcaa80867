mod cache;
mod extract;
mod mcp;
mod ranker;
mod server;
mod sources;

use anyhow::Result;
use clap::{Parser, ValueEnum};

const DEFAULT_PORT: u16 = 8000;

#[derive(Parser, Debug)]
#[command(version, about = "CRC Documentation MCP Server")]
struct Cli {
    /// Type of server to run
    #[arg(short, long, value_enum, default_value_t = ServerType::Sse)]
    server_type: ServerType,

    /// Listening port for the SSE server (falls back to the PORT environment
    /// variable, then 8000)
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ServerType {
    /// Start an SSE server
    Sse,
    /// Start a stdio server
    Stdio,
}

fn resolve_port(cli_port: Option<u16>) -> u16 {
    cli_port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.server_type {
        ServerType::Sse => {
            let addr = format!("0.0.0.0:{}", resolve_port(cli.port));
            println!("Starting SSE server on {}", addr);
            server::start_sse_server(&addr).await?;
        }
        ServerType::Stdio => {
            server::start_stdio_server().await?;
        }
    }

    Ok(())
}
