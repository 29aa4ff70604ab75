//! MCP server implementation for geoconnex-mcp.
//!
//! This crate wires the Geoconnex client into rmcp tool handlers and exposes the
//! MCP-facing API surface for exploring the graph and resolving river datasets.

mod helpers;
mod tools;
pub mod server;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use geoconnex_core::GeoconnexClient;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r"geoconnex-mcp answers questions about US hydrological features using the Geoconnex graph, an RDF database queried with SPARQL.

Workflow:
1. Call `geoconnex_shacl_shape` to learn which classes and predicates the graph generally uses.
   Not all data conforms to the shape; treat it as a guideline.
2. Use `explore_geoconnex_db` to run your own SPARQL queries and discover what data is available.
   The result is the raw SPARQL JSON returned by the endpoint.
3. Resolve a river to its persistent identifier (PID) with `get_geoconnex_pid_from_river_name`.
   The name is matched as a case-insensitive substring; the first match in name order wins.
   The literal text `No PID found` means the query ran but matched nothing.
4. Pass that PID to `get_datasets_for_geoconnex_pid` to list up to 5 temperature datasets
   from monitoring locations along the river.

Notes:
- PIDs look like `https://geoconnex.us/ref/mainstems/<id>`.
- River names and PIDs are inserted into the queries as-is; avoid quotes and braces.
- `health` returns `ok`.";

/// MCP server wrapper around the Geoconnex client and tool routers.
#[derive(Clone)]
pub struct GeoconnexMcp {
    tool_router: ToolRouter<Self>,
    client: Arc<GeoconnexClient>,
}

impl GeoconnexMcp {
    /// Creates a new server using a client by value.
    #[must_use]
    pub fn new(client: GeoconnexClient) -> Self {
        Self::with_client(Arc::new(client))
    }

    /// Creates a new server using a shared client handle.
    #[must_use]
    pub fn with_client(client: Arc<GeoconnexClient>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_explore()
            + Self::tool_router_lookup();
        Self {
            tool_router,
            client,
        }
    }

    pub(crate) fn client(&self) -> &GeoconnexClient {
        &self.client
    }

    pub(crate) fn shared_client(&self) -> Arc<GeoconnexClient> {
        Arc::clone(&self.client)
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl GeoconnexMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for GeoconnexMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
