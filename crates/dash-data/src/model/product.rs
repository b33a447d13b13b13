use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the product catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, `prod_{index:06}`
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

/// Catalog lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }
}

/// Sort orders the products panel offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSort {
    Newest,
    Name,
    Price,
    Stock,
}
