use contracts::shared::api::{ApiResponse, ListQuery, PagedResponse, StatusUpdate};
use contracts::system::menus::MenuNode;
use contracts::system::roles::Role;

use crate::shared::api_utils::{
    delete_envelope, envelope_data, get_envelope, list_path, outcome_only, put_envelope, segment,
};

/// Flat menu snapshot for one role. The envelope is returned as-is so the
/// store can tell a refused answer from a transport failure.
pub async fn fetch_menus_by_role(role: &Role) -> Result<ApiResponse<Vec<MenuNode>>, String> {
    get_envelope(&format!("/api/menus/role/{}", segment(role.as_str()))).await
}

/// One page of all menu records (management list)
pub async fn fetch_menu_page(query: ListQuery) -> Result<PagedResponse<MenuNode>, String> {
    let path = list_path("/api/menus", &query)?;
    envelope_data(get_envelope(&path).await?)
}

pub async fn update_menu_status(update: StatusUpdate) -> Result<(), String> {
    let response: ApiResponse<serde_json::Value> =
        put_envelope(&format!("/api/menus/{}/status", segment(&update.id)), &update).await?;
    outcome_only(response)
}

pub async fn delete_menu(id: &str) -> Result<(), String> {
    outcome_only(delete_envelope(&format!("/api/menus/{}", segment(id))).await?)
}
