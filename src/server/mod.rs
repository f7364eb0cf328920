//! MCP server for HubSpot list reports.
//!
//! Serves the report tools over stdio using the Model Context Protocol.

pub mod handlers;

pub use handlers::SyncMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server over stdio until the peer disconnects.
pub async fn run_server(server: SyncMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
