use crate::{
    domain::requests::property::{CreatePropertyRequest, UpdatePropertyRequest},
    model::property::{Property, PropertyStatus},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynPropertyQueryRepository = Arc<dyn PropertyQueryRepositoryTrait + Send + Sync>;
pub type DynPropertyCommandRepository = Arc<dyn PropertyCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PropertyQueryRepositoryTrait {
    /// Every stored property in insertion order, optionally narrowed to one
    /// status.
    async fn find_all(&self, status: Option<PropertyStatus>)
    -> Result<Vec<Property>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Property>, RepositoryError>;
}

#[async_trait]
pub trait PropertyCommandRepositoryTrait {
    async fn create_property(&self, req: &CreatePropertyRequest)
    -> Result<Property, RepositoryError>;
    async fn update_property(
        &self,
        id: i64,
        req: &UpdatePropertyRequest,
    ) -> Result<Property, RepositoryError>;
    async fn delete_property(&self, id: i64) -> Result<(), RepositoryError>;
}
