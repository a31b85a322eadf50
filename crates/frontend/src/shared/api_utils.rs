//! API utilities for frontend-backend communication
//!
//! Every console endpoint answers with an [`ApiResponse`] envelope; the helpers
//! here attach the bearer token and turn transport failures into `String`
//! errors that pages show as notifications.

use contracts::shared::api::{ApiResponse, ListQuery};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::config;
use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Built from the current window location and the configured backend port,
/// e.g. "http://localhost:3000". Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// Build a full API URL from a path ("/api/...")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `path?pageIndex=..&pageSize=..` for a server-side paginated list
pub fn list_path(path: &str, query: &ListQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(format!("{}?{}", path, qs))
}

/// Path segment escaped for use inside a URL
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Unwraps a successful envelope; a failed one becomes its message
pub fn envelope_data<T>(response: ApiResponse<T>) -> Result<T, String> {
    match response {
        ApiResponse {
            outcome: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiResponse { message, .. } => Err(message.unwrap_or_default()),
    }
}

/// For mutations whose answer carries no data
pub fn outcome_only<T>(response: ApiResponse<T>) -> Result<(), String> {
    if response.outcome {
        Ok(())
    } else {
        Err(response.message.unwrap_or_default())
    }
}

fn auth_header() -> Result<String, String> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, String> {
    if !response.ok() {
        let status = response.status();
        return match response.json::<ApiResponse<serde_json::Value>>().await {
            Ok(ApiResponse {
                message: Some(message),
                ..
            }) => Err(message),
            _ => Err(format!("Request failed: {}", status)),
        };
    }
    response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET with the bearer token, returning the raw envelope
pub async fn get_envelope<T: DeserializeOwned>(path: &str) -> Result<ApiResponse<T>, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

async fn send_body<B, T>(builder: RequestBuilder, body: &B) -> Result<ApiResponse<T>, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder
        .header("Authorization", &auth_header()?)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

pub async fn post_envelope<B, T>(path: &str, body: &B) -> Result<ApiResponse<T>, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    send_body(Request::post(&api_url(path)), body).await
}

pub async fn put_envelope<B, T>(path: &str, body: &B) -> Result<ApiResponse<T>, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    send_body(Request::put(&api_url(path)), body).await
}

pub async fn delete_envelope(path: &str) -> Result<ApiResponse<serde_json::Value>, String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api::SortOrder;

    #[test]
    fn test_list_path_encodes_query() {
        let query = ListQuery {
            page_index: 2,
            page_size: 20,
            sort_by: Some("name".into()),
            sort_order: SortOrder::Desc,
            search: "red shoes".into(),
        };
        let path = list_path("/api/products", &query).unwrap();
        assert!(path.starts_with("/api/products?"));
        assert!(path.contains("pageIndex=2"));
        assert!(path.contains("pageSize=20"));
        assert!(path.contains("sortBy=name"));
        assert!(path.contains("sortOrder=desc"));
        assert!(path.contains("search=red"));
    }

    #[test]
    fn test_list_path_skips_empty_filters() {
        let query = ListQuery {
            page_index: 0,
            page_size: 10,
            sort_by: None,
            sort_order: SortOrder::Asc,
            search: String::new(),
        };
        let path = list_path("/api/users", &query).unwrap();
        assert!(!path.contains("sortBy"));
        assert!(!path.contains("search"));
    }

    #[test]
    fn test_envelope_data() {
        assert_eq!(envelope_data(ApiResponse::ok(5)), Ok(5));
        assert_eq!(
            envelope_data::<u8>(ApiResponse::failed("Slug already taken")),
            Err("Slug already taken".to_string())
        );
        let silent: ApiResponse<u8> = ApiResponse {
            outcome: true,
            data: None,
            message: None,
        };
        assert_eq!(envelope_data(silent), Err(String::new()));
    }

    #[test]
    fn test_outcome_only() {
        assert_eq!(outcome_only(ApiResponse::<()>::failed("")), Err(String::new()));
        let done: ApiResponse<()> = ApiResponse {
            outcome: true,
            data: None,
            message: None,
        };
        assert_eq!(outcome_only(done), Ok(()));
    }

    #[test]
    fn test_segment_escapes() {
        assert_eq!(segment("SUPER ADMIN"), "SUPER%20ADMIN");
    }
}
