use contracts::domain::a001_category::Category;
use contracts::shared::api::{ApiResponse, ListQuery, PagedResponse, StatusUpdate};

use crate::shared::api_utils::{envelope_data, get_envelope, list_path, outcome_only, put_envelope, segment};

pub async fn fetch_category_page(query: ListQuery) -> Result<PagedResponse<Category>, String> {
    let path = list_path("/api/categories", &query)?;
    envelope_data(get_envelope(&path).await?)
}

pub async fn update_category_status(update: StatusUpdate) -> Result<(), String> {
    let path = format!("/api/categories/{}/status", segment(&update.id));
    let response: ApiResponse<serde_json::Value> = put_envelope(&path, &update).await?;
    outcome_only(response)
}
