//! MCP server exposing National Weather Service active alerts.
//!
//! Three tools are served over stdio: `make_call` (raw GET against the API),
//! `format_alerts` (GeoJSON features to flat records) and `get_alert` (both,
//! for one state code).

pub mod alerts;
pub mod config;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod nws;

pub use alerts::{AlertRecord, format_alerts};
pub use alerts::state::{AlertOutcome, get_alert};
pub use config::Config;
pub use error::{ErrorResult, FetchError, FetchErrorKind, FormatError};
pub use mcp::WeatherServer;
pub use nws::{JsonFetcher, NwsClient};
