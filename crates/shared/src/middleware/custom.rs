use crate::{
    errors::HttpError,
    middleware::{SanitizedParams, collect_body},
    validation::{check_trading_pair, coerce_amount, numeric_value},
};
use axum::{
    RequestPartsExt,
    body::Body,
    extract::{FromRequestParts, RawPathParams, Request},
    http::{header::CONTENT_LENGTH, request::Parts},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

/// The `pair` path parameter, split into its two symbols.
///
/// Prefers the sanitized copy when [`sanitize_input`](super::sanitize_input)
/// ran first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingPair {
    pub base: String,
    pub quote: String,
}

impl TradingPair {
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}

impl<S> FromRequestParts<S> for TradingPair
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pair = match parts.extensions.get::<SanitizedParams>() {
            Some(params) => params.get("pair").map(str::to_owned),
            None => parts.extract::<RawPathParams>().await.ok().and_then(|raw| {
                raw.iter()
                    .find(|(key, _)| *key == "pair")
                    .map(|(_, value)| value.to_owned())
            }),
        };

        let (base, quote) =
            check_trading_pair(pair.as_deref()).map_err(|e| HttpError::BadRequest(e.to_string()))?;

        Ok(Self {
            base: base.to_owned(),
            quote: quote.to_owned(),
        })
    }
}

/// Rejects a body whose `amount` is not a positive number up to the maximum,
/// and rewrites the field with its numeric value. Bodies without `amount`
/// pass untouched.
pub async fn validate_amount(req: Request, next: Next) -> Result<Response, HttpError> {
    let (mut parts, body) = req.into_parts();
    let bytes = collect_body(body).await?;

    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(mut record)) if record.contains_key("amount") => {
            let amount = coerce_amount(&record["amount"])
                .map_err(|e| HttpError::BadRequest(e.to_string()))?;
            record.insert("amount".to_string(), numeric_value(amount));

            let rewritten =
                serde_json::to_vec(&record).map_err(|e| HttpError::Internal(e.to_string()))?;
            parts.headers.remove(CONTENT_LENGTH);
            Body::from(rewritten)
        }
        _ => Body::from(bytes),
    };

    Ok(next.run(Request::from_parts(parts, body)).await)
}
