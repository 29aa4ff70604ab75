use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{GeoconnexMcp, helpers};

/// Parameters for running an arbitrary SPARQL query.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ExploreParams {
    /// A SPARQL query to run against the Geoconnex database that can be used to
    /// explore the database and discover what data is available.
    pub sparql_query: String,
}

#[tool_router(router = tool_router_explore, vis = "pub")]
impl GeoconnexMcp {
    #[tool(description = "A SHACL shape that describes the structure of RDF data in the Geoconnex graph database. Not all data will conform to this shape, but it is a good general guideline of what data is available.")]
    async fn geoconnex_shacl_shape(&self) -> Result<CallToolResult, ErrorData> {
        let shape = self
            .client()
            .fetch_shacl_shape()
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::text(shape)]))
    }

    #[tool(description = "Search through the Geoconnex graph database and discover info about what data is available. The Geoconnex graph database is a RDF database of hydrological features in the United States.")]
    async fn explore_geoconnex_db(
        &self,
        Parameters(params): Parameters<ExploreParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let raw = self
            .client()
            .explore(&params.sparql_query)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::text(raw)]))
    }
}
