//! Flattening of NWS GeoJSON alert features
//!
//! The API wraps each alert in a GeoJSON feature; only the `properties`
//! object is of interest. [`format_alerts`] lifts sixteen of its fields into
//! an [`AlertRecord`], keeping every key even when the source lacks it.

pub mod state;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FormatError;

/// One alert, reduced to the fields a reader cares about.
///
/// Every field is serialized, missing ones as `null`, so all records in a
/// response share the same shape. Values are copied through as the API sent
/// them; the NWS sends strings for all of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AlertRecord {
    pub id: Option<Value>,
    pub event: Option<Value>,
    /// From `areaDesc`
    pub area: Option<Value>,
    pub sent: Option<Value>,
    pub effective: Option<Value>,
    pub onset: Option<Value>,
    pub expires: Option<Value>,
    pub ends: Option<Value>,
    pub severity: Option<Value>,
    pub certainty: Option<Value>,
    pub urgency: Option<Value>,
    pub headline: Option<Value>,
    pub description: Option<Value>,
    pub instruction: Option<Value>,
    /// From `senderName`
    pub sender: Option<Value>,
    pub response: Option<Value>,
}

impl AlertRecord {
    /// Build a record from a feature's `properties` object.
    pub fn from_properties(props: &Map<String, Value>) -> Self {
        let field = |key: &str| props.get(key).filter(|v| !v.is_null()).cloned();

        Self {
            id: field("id"),
            event: field("event"),
            area: field("areaDesc"),
            sent: field("sent"),
            effective: field("effective"),
            onset: field("onset"),
            expires: field("expires"),
            ends: field("ends"),
            severity: field("severity"),
            certainty: field("certainty"),
            urgency: field("urgency"),
            headline: field("headline"),
            description: field("description"),
            instruction: field("instruction"),
            sender: field("senderName"),
            response: field("response"),
        }
    }

    /// Build a record from a whole feature; anything without a `properties`
    /// object yields an all-empty record.
    pub fn from_feature(feature: &Value) -> Self {
        feature
            .get("properties")
            .and_then(Value::as_object)
            .map(Self::from_properties)
            .unwrap_or_default()
    }
}

/// Turn a GeoJSON feature collection into one [`AlertRecord`] per feature.
///
/// A missing or `null` `features` key gives an empty list. Output keeps the
/// input order and length. `features` holding anything other than an array
/// is rejected.
pub fn format_alerts(data: &Value) -> Result<Vec<AlertRecord>, FormatError> {
    match data.get("features") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(features)) => Ok(features.iter().map(AlertRecord::from_feature).collect()),
        Some(other) => Err(FormatError::FeaturesNotSequence {
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
