use contracts::shared::api::ApiResponse;
use contracts::system::auth::UserInfo;

use crate::shared::api_utils::{envelope_data, get_envelope, outcome_only, post_envelope};

/// Current user for the stored token
pub async fn get_current_user() -> Result<UserInfo, String> {
    envelope_data(get_envelope("/api/auth/me").await?)
}

/// Revokes the session on the backend
pub async fn logout() -> Result<(), String> {
    let response: ApiResponse<serde_json::Value> =
        post_envelope("/api/auth/logout", &serde_json::json!({})).await?;
    outcome_only(response)
}
