//! Wire schema for the graph-data response and lenient extraction of the
//! historical point list.
//!
//! Only `fear_and_greed_historical.data` is decoded. Both levels are optional:
//! a missing or null key yields an empty list rather than an error. Points are
//! kept as raw JSON so that a single bad point (wrong field type, `null`
//! element) reaches the malformed-point policy instead of failing the body.

use super::provider::DataError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level response body. Every other key (current score, sub-indicators) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct GraphDataResponse {
    pub fear_and_greed_historical: Option<Historical>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Historical {
    pub data: Option<Vec<Value>>,
}

/// One historical point with its fields type-checked.
///
/// `x` is epoch milliseconds; the endpoint emits it as a JSON float
/// (e.g. `1594684800000.0`), so it is held as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rating: Option<String>,
}

impl RawPoint {
    /// Classify one raw point.
    ///
    /// - not an object → error
    /// - `x`/`y` absent or `null` → `None` (left for the transformer to judge)
    /// - `x`/`y` present but not a number → error
    /// - `rating` that is not a string → treated as absent
    pub fn from_value(value: Value) -> Result<Self, String> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(format!(
                    "point is not a JSON object (got {})",
                    json_kind(&other)
                ))
            }
        };

        let x = numeric_field(&mut fields, "x")?;
        let y = numeric_field(&mut fields, "y")?;
        let rating = match fields.remove("rating") {
            Some(Value::String(label)) => Some(label),
            None | Some(Value::Null) => None,
            Some(other) => {
                tracing::debug!(kind = json_kind(&other), "ignoring non-string rating");
                None
            }
        };

        Ok(Self { x, y, rating })
    }
}

fn numeric_field(fields: &mut Map<String, Value>, name: &str) -> Result<Option<f64>, String> {
    match fields.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(other) => Err(format!("'{name}' is not a number (got {})", json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl GraphDataResponse {
    /// Consume the response, yielding the raw historical points (empty if absent).
    pub fn into_points(self) -> Vec<Value> {
        self.fear_and_greed_historical
            .and_then(|h| h.data)
            .unwrap_or_default()
    }
}

/// Parse a raw body and extract its historical points.
pub fn extract_points(body: &str) -> Result<Vec<Value>, DataError> {
    let response: GraphDataResponse = serde_json::from_str(body)
        .map_err(|e| DataError::MalformedPayload(format!("failed to decode graph data: {e}")))?;
    Ok(response.into_points())
}
