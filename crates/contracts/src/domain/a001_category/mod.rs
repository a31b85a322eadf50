use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_name: Option<String>,
    pub product_count: u32,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}
