use crate::{config::Config, di::DependenciesInject};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub sanitize_property_routes: bool,
    pub body_limit_bytes: usize,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("sanitize_property_routes", &self.sanitize_property_routes)
            .field("body_limit_bytes", &self.body_limit_bytes)
            .finish()
    }
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(&mut registry)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            sanitize_property_routes: config.sanitize_property_routes,
            body_limit_bytes: config.body_limit_bytes,
        })
    }
}
