//! MCP server implementation
//!
//! This module contains the WeatherServer struct and its ServerHandler
//! implementation, delegating to the tools module for the actual work.

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::*;
use rmcp::service::{RequestContext, RoleServer};

use crate::config::Config;
use crate::nws::NwsClient;

/// MCP server exposing the weather alert tools
#[derive(Clone)]
pub struct WeatherServer {
    config: Config,
    client: NwsClient,
}

impl WeatherServer {
    pub fn new(config: Config) -> Self {
        let client = NwsClient::new(&config);
        Self { config, client }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for WeatherServer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ServerHandler for WeatherServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2025_03_26,
            server_info: Implementation {
                name: "weather-alerts".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Weather Alerts MCP Server".into()),
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Active weather alerts from the US National Weather Service. \
                 Use get_alert with a two-letter state code (e.g. CA, NY) for a formatted list. \
                 make_call fetches raw NWS API JSON and format_alerts simplifies alert data."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let result = crate::mcp::tools::list_tools()?;
        tracing::info!("ListTools returning {} tools", result.tools.len());
        Ok(result)
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("CallTool {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        crate::mcp::tools::call_tool(&self.config, &self.client, &request.name, arguments).await
    }
}
