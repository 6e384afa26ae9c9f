//! MCP surface for the alert tools
//!
//! `server` holds the rmcp [`ServerHandler`](rmcp::ServerHandler) and `tools`
//! the tool definitions and dispatch.

pub mod server;
pub mod tools;

pub use server::WeatherServer;
