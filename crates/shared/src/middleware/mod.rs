mod custom;
mod sanitize;
mod validate;

pub use self::custom::{TradingPair, validate_amount};
pub use self::sanitize::{SanitizedParams, sanitize_input};
pub use self::validate::{Validated, ValidatedJson, ValidatedQuery};

use crate::errors::HttpError;
use axum::body::{Body, Bytes};
use http_body_util::LengthLimitError;
use serde_json::{Map, Value};
use std::error::Error as StdError;

/// Buffers a request body. The size cap comes from the
/// `RequestBodyLimitLayer` wrapped around the router.
pub(crate) async fn collect_body(body: Body) -> Result<Bytes, HttpError> {
    axum::body::to_bytes(body, usize::MAX).await.map_err(|err| {
        if exceeds_limit(&err) {
            HttpError::PayloadTooLarge(err.to_string())
        } else {
            HttpError::InvalidPayload(err.to_string())
        }
    })
}

fn exceeds_limit(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err.is::<LengthLimitError>() {
            return true;
        }
        current = err.source();
    }
    false
}

/// Decodes a query string into a JSON object. Repeated keys collect into an
/// array, the way a typical form parser would hand them to a schema.
pub fn query_to_value(query: &str) -> Result<Value, serde_urlencoded::de::Error> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

    let mut record = Map::new();
    for (key, value) in pairs {
        match record.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                record.insert(key, Value::String(value));
            }
        }
    }

    Ok(Value::Object(record))
}

/// Inverse of [`query_to_value`] for flat string records.
pub(crate) fn value_to_query(record: &Map<String, Value>) -> Result<String, HttpError> {
    let mut pairs = Vec::new();
    for (key, value) in record {
        match value {
            Value::Array(values) => {
                for item in values {
                    pairs.push((key.as_str(), query_scalar(item)));
                }
            }
            other => pairs.push((key.as_str(), query_scalar(other))),
        }
    }

    serde_urlencoded::to_string(&pairs).map_err(|e| HttpError::Internal(e.to_string()))
}

fn query_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
