use crate::{
    errors::HttpError,
    middleware::{collect_body, query_to_value, value_to_query},
    validation::{sanitize_str, sanitize_value},
};
use axum::{
    RequestPartsExt,
    body::Body,
    extract::{RawPathParams, Request},
    http::{Uri, header::CONTENT_LENGTH, uri::PathAndQuery},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Path parameters of the matched route after sanitization.
///
/// Routing has already captured the raw parameters by the time middleware
/// runs, so the cleaned copies are published here instead of being written
/// back.
#[derive(Debug, Clone, Default)]
pub struct SanitizedParams(pub BTreeMap<String, String>);

impl SanitizedParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Strips `<`/`>` and surrounding whitespace from every string in the JSON
/// body, the query string and the path parameters. Use as a `route_layer` so
/// that path parameters are known.
pub async fn sanitize_input(req: Request, next: Next) -> Result<Response, HttpError> {
    let (mut parts, body) = req.into_parts();

    let params = match parts.extract::<RawPathParams>().await {
        Ok(raw) => raw
            .iter()
            .map(|(key, value)| (key.to_string(), sanitize_str(value)))
            .collect(),
        Err(_) => BTreeMap::new(),
    };
    parts.extensions.insert(SanitizedParams(params));

    if let Some(query) = parts.uri.query() {
        let cleaned = match sanitize_value(
            query_to_value(query).map_err(|e| HttpError::InternalValidation(e.to_string()))?,
        ) {
            Value::Object(record) => value_to_query(&record)?,
            _ => String::new(),
        };
        parts.uri = replace_query(&parts.uri, &cleaned)?;
    }

    let bytes = collect_body(body).await?;
    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(payload) => {
            let cleaned = serde_json::to_vec(&sanitize_value(payload))
                .map_err(|e| HttpError::Internal(e.to_string()))?;
            parts.headers.remove(CONTENT_LENGTH);
            Body::from(cleaned)
        }
        // not JSON: leave it for the body extractor to reject
        Err(_) => Body::from(bytes),
    };

    debug!("🧹 Sanitized request input for {}", parts.uri.path());

    Ok(next.run(Request::from_parts(parts, body)).await)
}

fn replace_query(uri: &Uri, query: &str) -> Result<Uri, HttpError> {
    let path_and_query = if query.is_empty() {
        uri.path().to_string()
    } else {
        format!("{}?{query}", uri.path())
    };

    let mut uri_parts = uri.clone().into_parts();
    uri_parts.path_and_query = Some(
        path_and_query
            .parse::<PathAndQuery>()
            .map_err(|e| HttpError::Internal(e.to_string()))?,
    );

    Uri::from_parts(uri_parts).map_err(|e| HttpError::Internal(e.to_string()))
}
