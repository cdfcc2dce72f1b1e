//! MCP server exposing the lookup engine as tools.

use crate::format::{format_aggregate_results, format_lookup_results};
use crate::lookup::{LookupEngine, sort_for_display};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router,
};

/// Parameters for the lookup tool
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct LookupRequest {
    /// Partial airport code, city code, airport name or city name (at least 3 characters)
    #[serde(default)]
    pub query: Option<String>,
    /// Re-sort results for display: metropolitan areas first, then strategy weight, then airport name
    #[serde(default)]
    pub display_order: bool,
}

/// Parameters for the lookup_aggregate tool
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct AggregateRequest {
    /// Prefix matched against airport code, city code, airport name and city name at once
    #[serde(default)]
    pub query: Option<String>,
}

/// Run the primary lookup and render the result.
pub async fn handle_lookup(
    engine: &LookupEngine,
    request: LookupRequest,
) -> Result<String, String> {
    let query = request.query.unwrap_or_default();
    let mut hits = engine
        .lookup(&query)
        .await
        .map_err(|e| format!("Lookup for '{}' failed: {}", query, e))?;

    if request.display_order {
        sort_for_display(&mut hits);
    }

    Ok(format_lookup_results(
        &query,
        &hits,
        engine.config().min_query_length,
    ))
}

/// Run the aggregate lookup and render the result.
pub async fn handle_aggregate(
    engine: &LookupEngine,
    request: AggregateRequest,
) -> Result<String, String> {
    let query = request.query.unwrap_or_default();
    let rows = engine
        .lookup_aggregate(&query)
        .await
        .map_err(|e| format!("Aggregate lookup for '{}' failed: {}", query, e))?;

    Ok(format_aggregate_results(
        &query,
        &rows,
        engine.config().min_query_length,
    ))
}

/// MCP server for type-ahead location lookups
#[derive(Clone)]
pub struct LookupServer {
    engine: LookupEngine,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for LookupServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupServer")
            .field("engine", &self.engine)
            .finish()
    }
}

#[tool_router]
impl LookupServer {
    pub fn new(engine: LookupEngine) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    pub fn engine(&self) -> &LookupEngine {
        &self.engine
    }

    #[tool(
        description = "Resolve a partial airport code, city code, airport name or city name into ranked airports and metropolitan areas. Airports that belong to a metropolitan area are expanded into the whole area."
    )]
    async fn lookup(
        &self,
        Parameters(request): Parameters<LookupRequest>,
    ) -> std::result::Result<String, String> {
        handle_lookup(&self.engine, request).await
    }

    #[tool(
        description = "List every airport and metropolitan area whose code or name starts with the query, one row per location, sorted by city name. No ranking or metropolitan expansion."
    )]
    async fn lookup_aggregate(
        &self,
        Parameters(request): Parameters<AggregateRequest>,
    ) -> std::result::Result<String, String> {
        handle_aggregate(&self.engine, request).await
    }
}

#[tool_handler]
impl ServerHandler for LookupServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "airport-lookup: type-ahead search over airports and metropolitan areas. \
                 Use lookup for ranked results with metropolitan expansion, \
                 or lookup_aggregate for a flat list of every matching location.",
            )
    }
}
