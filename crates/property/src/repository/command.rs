use crate::{
    abstract_trait::property::PropertyCommandRepositoryTrait,
    domain::requests::property::{CreatePropertyRequest, UpdatePropertyRequest},
    model::property::Property,
    repository::{
        SharedPropertyStore,
        store::{advance, now},
    },
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

#[derive(Clone)]
pub struct PropertyCommandRepository {
    store: SharedPropertyStore,
}

impl PropertyCommandRepository {
    pub fn new(store: SharedPropertyStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PropertyCommandRepositoryTrait for PropertyCommandRepository {
    async fn create_property(
        &self,
        req: &CreatePropertyRequest,
    ) -> Result<Property, RepositoryError> {
        let mut store = self.store.lock().await;

        let created_at = now();
        let property = Property {
            id: store.allocate_id(),
            title: req.title.clone(),
            description: req.description.clone().unwrap_or_default(),
            address: req.address.clone(),
            price: req.price,
            status: req.status.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        };

        store.properties.push(property.clone());

        info!("✅ Property created with ID: {}", property.id);
        Ok(property)
    }

    async fn update_property(
        &self,
        id: i64,
        req: &UpdatePropertyRequest,
    ) -> Result<Property, RepositoryError> {
        let mut store = self.store.lock().await;

        let Some(index) = store.position(id) else {
            error!("❌ Property not found for update: {}", id);
            return Err(RepositoryError::NotFound("Property"));
        };

        let property = &mut store.properties[index];

        if let Some(title) = &req.title {
            property.title = title.clone();
        }
        if let Some(description) = &req.description {
            property.description = description.clone();
        }
        if let Some(address) = &req.address {
            property.address = address.clone();
        }
        if let Some(price) = req.price {
            property.price = price;
        }
        if let Some(status) = req.status {
            property.status = status;
        }
        property.updated_at = advance(property.updated_at);

        info!("🔄 Property updated: {}", id);
        Ok(property.clone())
    }

    async fn delete_property(&self, id: i64) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().await;

        let Some(index) = store.position(id) else {
            error!("❌ Property not found for delete: {}", id);
            return Err(RepositoryError::NotFound("Property"));
        };

        store.properties.remove(index);

        info!("🗑️ Property deleted: {}", id);
        Ok(())
    }
}
