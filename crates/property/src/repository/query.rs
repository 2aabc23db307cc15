use crate::{
    abstract_trait::property::PropertyQueryRepositoryTrait,
    model::property::{Property, PropertyStatus},
    repository::SharedPropertyStore,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

#[derive(Clone)]
pub struct PropertyQueryRepository {
    store: SharedPropertyStore,
}

impl PropertyQueryRepository {
    pub fn new(store: SharedPropertyStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PropertyQueryRepositoryTrait for PropertyQueryRepository {
    async fn find_all(
        &self,
        status: Option<PropertyStatus>,
    ) -> Result<Vec<Property>, RepositoryError> {
        info!("🔍 Fetching properties with status: {:?}", status);

        let store = self.store.lock().await;

        let properties = store
            .properties
            .iter()
            .filter(|property| status.is_none_or(|status| property.status == status))
            .cloned()
            .collect();

        Ok(properties)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Property>, RepositoryError> {
        info!("🆔 Fetching property by ID: {}", id);

        let store = self.store.lock().await;

        Ok(store
            .properties
            .iter()
            .find(|property| property.id == id)
            .cloned())
    }
}
