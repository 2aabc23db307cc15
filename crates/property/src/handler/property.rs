use crate::{
    abstract_trait::property::DynPropertyService,
    domain::{
        requests::property::{CreatePropertyRequest, FindAllProperties, UpdatePropertyRequest},
        response::{
            api::ApiMessageResponse,
            property::{ApiPropertyPagination, ApiPropertyResponse},
        },
    },
    model::property::PropertyStatus,
    state::AppState,
};
use axum::{
    Json, RequestPartsExt,
    extract::{Extension, FromRequest, FromRequestParts, RawPathParams, Request},
    http::{StatusCode, request::Parts},
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    errors::{HttpError, RepositoryError, ServiceError},
    middleware::{SanitizedParams, ValidatedJson, ValidatedQuery, sanitize_input},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// The `{id}` path segment read as a leading integer, so `12abc` is 12.
/// Segments with no leading digits are treated as unknown ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyId(pub i64);

impl<S> FromRequestParts<S> for PropertyId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match parts.extensions.get::<SanitizedParams>() {
            Some(params) => params.get("id").map(str::to_owned),
            None => parts.extract::<RawPathParams>().await.ok().and_then(|raw| {
                raw.iter()
                    .find(|(key, _)| *key == "id")
                    .map(|(_, value)| value.to_owned())
            }),
        };

        raw.as_deref()
            .and_then(parse_leading_id)
            .map(PropertyId)
            .ok_or_else(|| ServiceError::Repo(RepositoryError::NotFound("Property")).into())
    }
}

fn parse_leading_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().ok()?;

    Some(if negative { -value } else { value })
}

#[utoipa::path(
    post,
    path = "/properties",
    tag = "Property",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property created", body = ApiPropertyResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_property(
    Extension(service): Extension<DynPropertyService>,
    ValidatedJson(body): ValidatedJson<CreatePropertyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_property(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/properties",
    tag = "Property",
    params(
        ("status" = Option<PropertyStatus>, Query, description = "Only properties with this status"),
        ("limit" = Option<i64>, Query, description = "Page size, at least 1"),
        ("offset" = Option<i64>, Query, description = "Records to skip")
    ),
    responses(
        (status = 200, description = "List of properties", body = ApiPropertyPagination),
        (status = 400, description = "Query validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_properties(
    Extension(service): Extension<DynPropertyService>,
    ValidatedQuery(params): ValidatedQuery<FindAllProperties>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/properties/{id}",
    tag = "Property",
    params(("id" = i64, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property details", body = ApiPropertyResponse),
        (status = 404, description = "Property not found")
    )
)]
pub async fn get_property(
    Extension(service): Extension<DynPropertyService>,
    PropertyId(id): PropertyId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/properties/{id}",
    tag = "Property",
    params(("id" = i64, Path, description = "Property ID")),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Property updated", body = ApiPropertyResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn update_property(
    Extension(service): Extension<DynPropertyService>,
    PropertyId(id): PropertyId,
    request: Request,
) -> Result<impl IntoResponse, HttpError> {
    // a missing id is reported before the body is looked at
    service.ensure_exists(id).await?;

    let ValidatedJson(body) =
        ValidatedJson::<UpdatePropertyRequest>::from_request(request, &()).await?;

    let response = service.update_property(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/properties/{id}",
    tag = "Property",
    params(("id" = i64, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property deleted", body = ApiMessageResponse),
        (status = 404, description = "Property not found")
    )
)]
pub async fn delete_property(
    Extension(service): Extension<DynPropertyService>,
    PropertyId(id): PropertyId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_property(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn property_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let router = OpenApiRouter::new()
        .route("/properties", post(create_property))
        .route("/properties", get(get_properties))
        .route("/properties/{id}", get(get_property))
        .route("/properties/{id}", put(update_property))
        .route("/properties/{id}", delete(delete_property));

    let router = if app_state.sanitize_property_routes {
        router.route_layer(middleware::from_fn(sanitize_input))
    } else {
        router
    };

    router.layer(Extension(app_state.di_container.property_service.clone()))
}
