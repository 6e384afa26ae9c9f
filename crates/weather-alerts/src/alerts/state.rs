//! Active alerts for one US state.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use tracing::{info, instrument, warn};

use super::{AlertRecord, format_alerts};
use crate::nws::JsonFetcher;

/// Shown when the request failed or the API answered with an error.
pub const UNABLE_TO_GET_ALERT: &str = "Unable to get alert";

/// Shown when the API answered but listed no alerts.
pub const NO_ACTIVE_ALERTS: &str = "No active alerts";

/// What `get_alert` hands back to the caller.
///
/// Failures and empty answers collapse into two fixed messages; the caller
/// is expected to show them as-is.
///
/// Serializes as the list of records, or as the message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertOutcome {
    Alerts(Vec<AlertRecord>),
    Unavailable,
    NoActiveAlerts,
}

impl fmt::Display for AlertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertOutcome::Alerts(alerts) => write!(f, "{} active alert(s)", alerts.len()),
            AlertOutcome::Unavailable => f.write_str(UNABLE_TO_GET_ALERT),
            AlertOutcome::NoActiveAlerts => f.write_str(NO_ACTIVE_ALERTS),
        }
    }
}

impl Serialize for AlertOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AlertOutcome::Alerts(alerts) => alerts.serialize(serializer),
            message => serializer.collect_str(message),
        }
    }
}

/// URL of the active-alerts endpoint for `state`. The code is used verbatim.
pub fn alerts_url(base_url: &str, state: &str) -> String {
    format!("{}/alerts/active/area/{}", base_url.trim_end_matches('/'), state)
}

/// Fetch and format the active alerts for a state code.
///
/// The code is not checked or normalized; an unknown code is sent as-is and
/// whatever the API answers flows through the same rules.
#[instrument(skip_all, fields(state = %state))]
pub async fn get_alert<F>(fetcher: &F, base_url: &str, state: &str) -> AlertOutcome
where
    F: JsonFetcher + ?Sized,
{
    let url = alerts_url(base_url, state);

    let data = match fetcher.fetch(&url).await {
        Ok(data) => data,
        Err(e) => {
            warn!(kind = ?e.kind(), "Alert fetch failed: {}", e);
            return AlertOutcome::Unavailable;
        }
    };

    if !is_truthy(&data) || reports_error(&data) {
        warn!("Alert API returned an empty or error body");
        return AlertOutcome::Unavailable;
    }

    if !data.get("features").is_some_and(is_truthy) {
        info!("No active alerts");
        return AlertOutcome::NoActiveAlerts;
    }

    match format_alerts(&data) {
        Ok(alerts) => {
            info!("Found {} active alerts", alerts.len());
            AlertOutcome::Alerts(alerts)
        }
        Err(e) => {
            warn!("Alert body could not be formatted: {}", e);
            AlertOutcome::Unavailable
        }
    }
}

/// A body that carries an `error` key, or is not an object at all.
///
/// Strings and lists (e.g. `"error: upstream down"`) are never a feature
/// collection, so they are reported the same way as an explicit error.
fn reports_error(data: &Value) -> bool {
    match data {
        Value::Object(map) => map.contains_key("error"),
        _ => true,
    }
}

/// Loose truthiness: null, false, zero and empty strings, arrays and
/// objects count as false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
