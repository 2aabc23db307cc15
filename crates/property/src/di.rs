use crate::{
    abstract_trait::property::{
        DynPropertyCommandRepository, DynPropertyQueryRepository, DynPropertyService,
    },
    repository::{PropertyCommandRepository, PropertyQueryRepository, PropertyStore},
    service::PropertyService,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub property_service: DynPropertyService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("property_service", &"PropertyService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(registry: &mut Registry) -> Result<Self> {
        let store = PropertyStore::shared();

        let query = Arc::new(PropertyQueryRepository::new(store.clone())) as DynPropertyQueryRepository;
        let command = Arc::new(PropertyCommandRepository::new(store)) as DynPropertyCommandRepository;

        let property_service = Arc::new(
            PropertyService::new(query, command, registry)
                .context("failed initialize property service")?,
        ) as DynPropertyService;

        Ok(Self { property_service })
    }
}
