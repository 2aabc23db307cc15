use crate::model::property::{Property, PropertyStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub address: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub status: PropertyStatus,
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub created_at: String,
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub updated_at: String,
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Whole prices go out as integers: `100000`, not `100000.0`.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

impl From<Property> for PropertyResponse {
    fn from(value: Property) -> Self {
        PropertyResponse {
            id: value.id,
            created_at: format_timestamp(&value.created_at),
            updated_at: format_timestamp(&value.updated_at),
            title: value.title,
            description: value.description,
            address: value.address,
            price: value.price,
            status: value.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiPropertyResponse {
    pub success: bool,
    pub property: PropertyResponse,
}

impl ApiPropertyResponse {
    pub fn ok(property: Property) -> Self {
        Self {
            success: true,
            property: property.into(),
        }
    }
}

/// A filtered page of properties. `total` counts the whole filtered
/// collection, `count` only this page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiPropertyPagination {
    pub success: bool,
    pub count: usize,
    pub total: usize,
    pub limit: Option<i64>,
    pub offset: i64,
    pub properties: Vec<PropertyResponse>,
}
