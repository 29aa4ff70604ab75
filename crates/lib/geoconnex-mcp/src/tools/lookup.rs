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

/// Parameters for resolving a river name to a PID.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RiverNameParams {
    /// The name of the river
    pub river_name: String,
}

/// Parameters for listing datasets attached to a PID.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PidParams {
    /// The Geoconnex persistent identifier (PID) of the river
    pub pid: String,
}

#[tool_router(router = tool_router_lookup, vis = "pub")]
impl GeoconnexMcp {
    #[tool(description = "Given a river name, search the Geoconnex graph database for the associated persistent identifier (PID) and return it.")]
    async fn get_geoconnex_pid_from_river_name(
        &self,
        Parameters(params): Parameters<RiverNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let client = self.shared_client();
        let pid = helpers::guarded(async move {
            client.pid_for_river_name(&params.river_name).await
        })
        .await?;
        Ok(CallToolResult::success(vec![Content::text(pid)]))
    }

    #[tool(description = "Given a PID, return a list of datasets associated with the river.")]
    async fn get_datasets_for_geoconnex_pid(
        &self,
        Parameters(params): Parameters<PidParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let client = self.shared_client();
        let datasets =
            helpers::guarded(async move { client.datasets_for_pid(&params.pid).await }).await?;
        Ok(CallToolResult::success(vec![Content::json(datasets)?]))
    }
}
