use crate::{
    abstract_trait::property::{
        DynPropertyCommandRepository, DynPropertyQueryRepository, PropertyServiceTrait,
    },
    domain::{
        requests::property::{CreatePropertyRequest, FindAllProperties, UpdatePropertyRequest},
        response::{
            api::ApiMessageResponse,
            property::{ApiPropertyPagination, ApiPropertyResponse, PropertyResponse},
        },
    },
};
use anyhow::Result;
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct PropertyService {
    query: DynPropertyQueryRepository,
    command: DynPropertyCommandRepository,
    metrics: Metrics,
}

impl PropertyService {
    pub fn new(
        query: DynPropertyQueryRepository,
        command: DynPropertyCommandRepository,
        registry: &mut Registry,
    ) -> Result<Self> {
        let metrics = Metrics::new();
        metrics.register(registry, "property_service", "property service");

        Ok(Self {
            query,
            command,
            metrics,
        })
    }

    fn complete<T>(
        &self,
        method: Method,
        start: Instant,
        result: &Result<T, ServiceError>,
        operation: &str,
    ) {
        let status = match result {
            Ok(_) => {
                info!("✅ Operation completed successfully: {operation}");
                Status::Success
            }
            Err(e) => {
                error!("❌ Operation failed: {operation}: {e}");
                Status::Error
            }
        };

        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }

    async fn list(&self, req: &FindAllProperties) -> Result<ApiPropertyPagination, ServiceError> {
        let properties = self.query.find_all(req.status).await?;
        let total = properties.len();

        let page = paginate(properties, req.limit, req.offset)?;

        Ok(ApiPropertyPagination {
            success: true,
            count: page.len(),
            total,
            limit: req.limit,
            offset: req.offset.unwrap_or(0),
            properties: page.into_iter().map(PropertyResponse::from).collect(),
        })
    }
}

/// Checks the page bounds and cuts `[offset, offset + limit)` out of the
/// filtered list.
fn paginate<T>(
    items: Vec<T>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<T>, ServiceError> {
    if limit.is_some_and(|limit| limit < 1) {
        return Err(ServiceError::InvalidPagination(
            "Limit must be a positive number".to_string(),
        ));
    }

    let offset = offset.unwrap_or(0);
    if offset < 0 {
        return Err(ServiceError::InvalidPagination(
            "Offset must be a non-negative number".to_string(),
        ));
    }

    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = limit
        .and_then(|limit| usize::try_from(limit).ok())
        .unwrap_or(usize::MAX);

    Ok(items.into_iter().skip(skip).take(take).collect())
}

#[async_trait]
impl PropertyServiceTrait for PropertyService {
    async fn create_property(
        &self,
        req: &CreatePropertyRequest,
    ) -> Result<ApiPropertyResponse, ServiceError> {
        info!("🏗️ Creating property: {}", req.title);
        let start = Instant::now();

        let result = self
            .command
            .create_property(req)
            .await
            .map(ApiPropertyResponse::ok)
            .map_err(ServiceError::from);

        self.complete(Method::Post, start, &result, "create_property");
        result
    }

    async fn find_all(
        &self,
        req: &FindAllProperties,
    ) -> Result<ApiPropertyPagination, ServiceError> {
        info!(
            "🔍 Finding properties | Status: {:?}, Limit: {:?}, Offset: {:?}",
            req.status, req.limit, req.offset
        );
        let start = Instant::now();

        let result = self.list(req).await;

        self.complete(Method::Get, start, &result, "find_all");
        result
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiPropertyResponse, ServiceError> {
        info!("🆔 Finding property by ID: {}", id);
        let start = Instant::now();

        let result = match self.query.find_by_id(id).await {
            Ok(Some(property)) => Ok(ApiPropertyResponse::ok(property)),
            Ok(None) => Err(ServiceError::Repo(RepositoryError::NotFound("Property"))),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        self.complete(Method::Get, start, &result, "find_by_id");
        result
    }

    async fn ensure_exists(&self, id: i64) -> Result<(), ServiceError> {
        let start = Instant::now();

        let result = match self.query.find_by_id(id).await {
            Ok(Some(_)) => return Ok(()),
            Ok(None) => Err(ServiceError::Repo(RepositoryError::NotFound("Property"))),
            Err(e) => Err(ServiceError::Repo(e)),
        };

        self.complete(Method::Put, start, &result, "update_property");
        result
    }

    async fn update_property(
        &self,
        id: i64,
        req: &UpdatePropertyRequest,
    ) -> Result<ApiPropertyResponse, ServiceError> {
        info!("🔄 Updating property: {}", id);
        let start = Instant::now();

        let result = self
            .command
            .update_property(id, req)
            .await
            .map(ApiPropertyResponse::ok)
            .map_err(ServiceError::from);

        self.complete(Method::Put, start, &result, "update_property");
        result
    }

    async fn delete_property(&self, id: i64) -> Result<ApiMessageResponse, ServiceError> {
        info!("🗑️ Deleting property: {}", id);
        let start = Instant::now();

        let result = self
            .command
            .delete_property(id)
            .await
            .map(|_| ApiMessageResponse::ok("Property deleted successfully"))
            .map_err(ServiceError::from);

        self.complete(Method::Delete, start, &result, "delete_property");
        result
    }
}
