//! HTTP access to the National Weather Service API
//!
//! [`JsonFetcher`] is the seam between the alert logic and the network;
//! [`NwsClient`] is the reqwest-backed implementation the server uses.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::{ACCEPT_GEO_JSON, Config};
use crate::error::FetchError;

/// Performs one GET and decodes the body as JSON.
///
/// Implementations must be Send + Sync for use across async boundaries.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// NWS client: fixed headers, one attempt, bounded by the configured timeout
#[derive(Debug, Clone)]
pub struct NwsClient {
    user_agent: String,
    timeout: Duration,
}

impl NwsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.request_timeout,
        }
    }
}

#[async_trait]
impl JsonFetcher for NwsClient {
    /// Fetch `url` and return its JSON body unchanged.
    ///
    /// A client is built for each call, so no connections outlive it.
    /// Redirects are not followed: any status outside 2xx is a failure.
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        debug!("Sending HTTP GET request");
        let response = client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_GEO_JSON)
            .send()
            .await
            .map_err(|e| {
                let err = FetchError::from_reqwest(url, e);
                warn!(kind = ?err.kind(), "HTTP request failed: {}", err);
                err
            })?;

        let status = response.status();
        debug!("Received HTTP response with status: {}", status);

        if !status.is_success() {
            warn!("Non-success status code: {}", status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            let err = FetchError::from_reqwest(url, e);
            warn!(kind = ?err.kind(), "Failed to read response body: {}", err);
            err
        })?;
        debug!("Read {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|source| {
            warn!("Response body is not JSON: {}", source);
            FetchError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }
}
