use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use weather_alerts::{Config, WeatherServer};

#[tokio::main]
async fn main() -> Result<()> {
    weather_alerts::logging::init()?;

    let config = Config::default();
    tracing::info!("Starting weather-alerts MCP server (stdio mode), API base {}", config.base_url);

    let service = WeatherServer::new(config)
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("Failed to start MCP service: {}", e))?;

    let reason = service.waiting().await?;
    tracing::info!("MCP service stopped: {:?}", reason);

    Ok(())
}
