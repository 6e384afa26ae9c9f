//! Fixed settings for talking to the National Weather Service API.

use std::time::Duration;

/// Base URL of the NWS API
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// User agent sent with every request
pub const USER_AGENT: &str = "weather-app/1.0";

/// Accept header value for GeoJSON responses
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// Total timeout for one request, connect included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings handed to the server and the HTTP client at construction.
///
/// `Config::default()` is what the binary runs with. Nothing here is read
/// from files or the environment; tests build their own value to point
/// `base_url` at a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Same defaults, different API base
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://api.weather.gov");
        assert_eq!(config.user_agent, "weather-app/1.0");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_base_url_keeps_other_defaults() {
        let config = Config::with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_agent, USER_AGENT);
        assert_eq!(config.request_timeout, REQUEST_TIMEOUT);
    }
}
