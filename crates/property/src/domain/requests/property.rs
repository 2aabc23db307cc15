use crate::model::property::PropertyStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::{
    middleware::Validated,
    validation::{Schema, schemas},
};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePropertyRequest {
    #[schema(example = "Flat A")]
    pub title: String,

    pub description: Option<String>,

    #[schema(example = "1 Main St")]
    pub address: String,

    #[schema(example = 100000)]
    pub price: f64,

    pub status: Option<PropertyStatus>,
}

impl Validated for CreatePropertyRequest {
    fn schema() -> &'static Schema {
        &schemas::PROPERTY
    }
}

/// Partial update. Only these fields can change; anything else in the body
/// is dropped by the schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    #[schema(example = 125000)]
    pub price: Option<f64>,
    pub status: Option<PropertyStatus>,
}

impl Validated for UpdatePropertyRequest {
    fn schema() -> &'static Schema {
        &schemas::UPDATE_PROPERTY
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindAllProperties {
    pub status: Option<PropertyStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,

    /// Undeclared query keys, kept as given.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Validated for FindAllProperties {
    fn schema() -> &'static Schema {
        &schemas::PROPERTY_QUERY
    }
}
