use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product as listed in the CMS panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category_name: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub image_count: u32,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}
