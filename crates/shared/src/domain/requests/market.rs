use crate::middleware::Validated;
use crate::validation::{Schema, schemas};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl Validated for PaginationQuery {
    fn schema() -> &'static Schema {
        &schemas::PAGINATION_QUERY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketSort {
    Volume,
    Change,
    Price,
    MarketCap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketQuery {
    pub search: Option<String>,
    pub sort: Option<MarketSort>,
    pub filter: Option<String>,
}

impl Validated for MarketQuery {
    fn schema() -> &'static Schema {
        &schemas::MARKET_QUERY
    }
}
