use crate::domain::{
    requests::property::{CreatePropertyRequest, FindAllProperties, UpdatePropertyRequest},
    response::{
        api::ApiMessageResponse,
        property::{ApiPropertyPagination, ApiPropertyResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynPropertyService = Arc<dyn PropertyServiceTrait + Send + Sync>;

#[async_trait]
pub trait PropertyServiceTrait {
    async fn create_property(
        &self,
        req: &CreatePropertyRequest,
    ) -> Result<ApiPropertyResponse, ServiceError>;
    async fn find_all(&self, req: &FindAllProperties)
    -> Result<ApiPropertyPagination, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiPropertyResponse, ServiceError>;
    /// Fails with not-found when no property has `id`, ahead of an update.
    async fn ensure_exists(&self, id: i64) -> Result<(), ServiceError>;
    async fn update_property(
        &self,
        id: i64,
        req: &UpdatePropertyRequest,
    ) -> Result<ApiPropertyResponse, ServiceError>;
    async fn delete_property(&self, id: i64) -> Result<ApiMessageResponse, ServiceError>;
}
