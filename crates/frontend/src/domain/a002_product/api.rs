use contracts::domain::a002_product::Product;
use contracts::shared::api::{ApiResponse, ListQuery, PagedResponse, StatusUpdate};

use crate::shared::api_utils::{envelope_data, get_envelope, list_path, outcome_only, put_envelope, segment};

pub async fn fetch_product_page(query: ListQuery) -> Result<PagedResponse<Product>, String> {
    let path = list_path("/api/products", &query)?;
    envelope_data(get_envelope(&path).await?)
}

pub async fn update_product_status(update: StatusUpdate) -> Result<(), String> {
    let path = format!("/api/products/{}/status", segment(&update.id));
    let response: ApiResponse<serde_json::Value> = put_envelope(&path, &update).await?;
    outcome_only(response)
}
