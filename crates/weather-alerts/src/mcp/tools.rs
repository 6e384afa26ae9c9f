//! MCP tool definitions and handlers
//!
//! Each tool parses its arguments into a typed struct, runs the matching
//! operation and renders the result as text content. Fetch failures and
//! empty answers are tool output, not protocol errors.

use rmcp::ErrorData as McpError;
use rmcp::model::*;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::alerts::format_alerts;
use crate::alerts::state::{AlertOutcome, get_alert};
use crate::config::Config;
use crate::error::ErrorResult;
use crate::nws::JsonFetcher;

pub const MAKE_CALL: &str = "make_call";
pub const FORMAT_ALERTS: &str = "format_alerts";
pub const GET_ALERT: &str = "get_alert";

/// Arguments for `make_call`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MakeCallArgs {
    /// URL to request from the NWS API
    pub url: String,
}

/// Arguments for `format_alerts`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FormatAlertsArgs {
    /// NWS GeoJSON alert data, as returned by make_call
    pub data: serde_json::Map<String, Value>,
}

/// Arguments for `get_alert`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAlertArgs {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

/// List all available tools
pub fn list_tools() -> Result<ListToolsResult, McpError> {
    fn to_schema<T: JsonSchema>()
    -> Result<Arc<serde_json::Map<String, serde_json::Value>>, McpError> {
        let schema = schema_for!(T);
        let json_value = serde_json::to_value(schema).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize schema: {}", e), None)
        })?;
        let object = json_value
            .as_object()
            .ok_or_else(|| McpError::internal_error("Schema is not a JSON object", None))?
            .clone();
        Ok(Arc::new(object))
    }

    Ok(ListToolsResult {
        tools: vec![
            Tool {
                name: MAKE_CALL.into(),
                title: Some("NWS API request".into()),
                description: Some(
                    "Make a GET request to the NWS API. Returns the JSON body, \
                     or {\"error\", \"kind\"} describing why the request failed."
                        .into(),
                ),
                input_schema: to_schema::<MakeCallArgs>()?,
                output_schema: None,
                annotations: None,
                icons: None,
            },
            Tool {
                name: FORMAT_ALERTS.into(),
                title: Some("Format alerts".into()),
                description: Some(
                    "Take NWS GeoJSON alert data and return a simplified list of alerts \
                     with the most relevant information extracted."
                        .into(),
                ),
                input_schema: to_schema::<FormatAlertsArgs>()?,
                output_schema: None,
                annotations: None,
                icons: None,
            },
            Tool {
                name: GET_ALERT.into(),
                title: Some("Active alerts by state".into()),
                description: Some("Fetch the active weather alerts for a US state.".into()),
                input_schema: to_schema::<GetAlertArgs>()?,
                output_schema: None,
                annotations: None,
                icons: None,
            },
        ],
        next_cursor: None,
    })
}

/// Call a tool by name with given arguments
pub async fn call_tool<F>(
    config: &Config,
    fetcher: &F,
    tool_name: &str,
    arguments: serde_json::Map<String, serde_json::Value>,
) -> Result<CallToolResult, McpError>
where
    F: JsonFetcher + ?Sized,
{
    let args_value = serde_json::Value::Object(arguments);

    match tool_name {
        MAKE_CALL => {
            let args: MakeCallArgs = parse_args(args_value)?;
            make_call(fetcher, args).await
        }
        FORMAT_ALERTS => {
            let args: FormatAlertsArgs = parse_args(args_value)?;
            format_alerts_tool(args)
        }
        GET_ALERT => {
            let args: GetAlertArgs = parse_args(args_value)?;
            get_alert_tool(config, fetcher, args).await
        }
        _ => Err(McpError::method_not_found::<CallToolRequestMethod>()),
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, McpError> {
    serde_json::from_value(value)
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {}", e), None))
}

/// Execute make_call
pub async fn make_call<F>(fetcher: &F, args: MakeCallArgs) -> Result<CallToolResult, McpError>
where
    F: JsonFetcher + ?Sized,
{
    let content = match fetcher.fetch(&args.url).await {
        Ok(body) => json_content(&body)?,
        Err(e) => json_content(&ErrorResult::from(&e))?,
    };
    Ok(CallToolResult::success(vec![content]))
}

/// Execute format_alerts
pub fn format_alerts_tool(args: FormatAlertsArgs) -> Result<CallToolResult, McpError> {
    let data = Value::Object(args.data);
    let alerts = format_alerts(&data)
        .map_err(|e| McpError::invalid_params(format!("Invalid alert data: {}", e), None))?;

    info!("Formatted {} alerts", alerts.len());
    Ok(CallToolResult::success(vec![json_content(&alerts)?]))
}

/// Execute get_alert
pub async fn get_alert_tool<F>(
    config: &Config,
    fetcher: &F,
    args: GetAlertArgs,
) -> Result<CallToolResult, McpError>
where
    F: JsonFetcher + ?Sized,
{
    let content = match get_alert(fetcher, &config.base_url, &args.state).await {
        AlertOutcome::Alerts(alerts) => json_content(&alerts)?,
        message => Content::text(message.to_string()),
    };
    Ok(CallToolResult::success(vec![content]))
}

fn json_content<T: Serialize>(value: &T) -> Result<Content, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize result: {}", e), None)
    })?;
    Ok(Content::text(text))
}
