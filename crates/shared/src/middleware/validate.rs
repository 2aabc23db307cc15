use crate::{
    errors::HttpError,
    middleware::{collect_body, query_to_value},
    validation::Schema,
};
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Binds a typed request to the named schema that guards it.
pub trait Validated: DeserializeOwned {
    fn schema() -> &'static Schema;
}

/// JSON body checked against `T::schema()` and then deserialized from the
/// normalized record. An empty body counts as `{}`.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: Validated + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = collect_body(req.into_body()).await?;

        let payload = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes).map_err(|e| HttpError::InvalidPayload(e.to_string()))?
        };

        let schema = T::schema();
        let record = schema.validate(&payload).map_err(|details| {
            warn!(
                "⚠️ Body rejected by schema '{}': {} violation(s)",
                schema.name,
                details.len()
            );
            HttpError::ValidationFailed(details)
        })?;

        let value = serde_json::from_value(Value::Object(record))
            .map_err(|e| HttpError::InvalidPayload(e.to_string()))?;

        Ok(Self(value))
    }
}

/// Query string checked against `T::schema()`.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: Validated + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let payload =
            query_to_value(query).map_err(|e| HttpError::InternalValidation(e.to_string()))?;

        let schema = T::schema();
        let record = schema.validate(&payload).map_err(|details| {
            warn!(
                "⚠️ Query rejected by schema '{}': {} violation(s)",
                schema.name,
                details.len()
            );
            HttpError::QueryValidationFailed(details)
        })?;

        let value = serde_json::from_value(Value::Object(record))
            .map_err(|e| HttpError::InternalValidation(e.to_string()))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{CreateOrderRequest, OrderQuery, OrderSide, OrderStatus};
    use axum::{
        Json, Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    async fn create_order(ValidatedJson(order): ValidatedJson<CreateOrderRequest>) -> Json<Value> {
        Json(json!({
            "success": true,
            "buy": order.side == OrderSide::Buy,
            "amount": order.amount,
        }))
    }

    async fn list_orders(ValidatedQuery(query): ValidatedQuery<OrderQuery>) -> Json<Value> {
        Json(json!({
            "success": true,
            "open": query.status == Some(OrderStatus::Open),
            "limit": query.limit,
        }))
    }

    fn app() -> Router {
        Router::new()
            .route("/orders", post(create_order))
            .route("/orders", get(list_orders))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let res = app().oneshot(request).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/orders")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_and_coerces_a_valid_order() {
        let (status, body) = send(post_json(
            r#"{"pair":"BTC/USDT","side":"buy","type":"market","amount":"0.25"}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "buy": true, "amount": 0.25 }));
    }

    #[tokio::test]
    async fn invalid_order_lists_offending_fields() {
        let (status, body) = send(post_json(
            r#"{"pair":"BTCUSDT","side":"buy","type":"swap","amount":5}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Validation failed",
                "details": [
                    { "field": "pair", "message": "Invalid trading pair format" },
                    { "field": "type", "message": "Type must be market or limit" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn malformed_json_falls_back_to_a_generic_message() {
        let (status, body) = send(post_json(r#"{"pair": "#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Validation failed"));
        assert!(body["message"].is_string());
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn empty_body_reports_required_fields() {
        let (status, body) = send(post_json("")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["pair", "side", "type", "amount"]);
    }

    #[tokio::test]
    async fn query_parameters_are_validated_and_converted() {
        let request = Request::builder()
            .uri("/orders?status=open&limit=20&cursor=abc")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "open": true, "limit": 20 }));
    }

    #[tokio::test]
    async fn invalid_query_uses_the_query_envelope() {
        let request = Request::builder()
            .uri("/orders?status=closed&limit=-3")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Query validation failed"));
        assert_eq!(body["details"][0]["field"], json!("status"));
        assert_eq!(body["details"][1], json!({ "field": "limit", "message": "Invalid" }));
    }
}
