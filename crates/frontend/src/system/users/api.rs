use contracts::shared::api::{ApiResponse, ListQuery, PagedResponse, StatusUpdate};
use contracts::system::users::User;

use crate::shared::api_utils::{envelope_data, get_envelope, list_path, outcome_only, put_envelope, segment};

/// One page of console users
pub async fn fetch_user_page(query: ListQuery) -> Result<PagedResponse<User>, String> {
    let path = list_path("/api/system/users", &query)?;
    envelope_data(get_envelope(&path).await?)
}

/// Blocks or unblocks a user
pub async fn update_user_status(update: StatusUpdate) -> Result<(), String> {
    let path = format!("/api/system/users/{}/status", segment(&update.id));
    let response: ApiResponse<serde_json::Value> = put_envelope(&path, &update).await?;
    outcome_only(response)
}
