use serde::{Deserialize, Serialize};

/// Envelope returned by every console endpoint.
///
/// `outcome = false` means the call did not succeed; `message` then carries
/// the backend's explanation when it has one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub outcome: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            outcome: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            outcome: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Data of a successful response, `None` otherwise
    pub fn into_data(self) -> Option<T> {
        if self.outcome {
            self.data
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query string of a server-side paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page_index: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub search: String,
}

/// One page of a list plus the dataset-wide count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Toggle payload shared by every entity with an `is_active` flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub id: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_response_without_data() {
        let resp: ApiResponse<Vec<String>> =
            serde_json::from_str(r#"{"outcome": false}"#).unwrap();
        assert!(!resp.outcome);
        assert!(resp.message.is_none());
        assert!(resp.into_data().is_none());
    }

    #[test]
    fn test_list_query_wire_names() {
        let query = ListQuery {
            page_index: 2,
            page_size: 10,
            sort_by: Some("name".to_string()),
            sort_order: SortOrder::Desc,
            search: String::new(),
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["pageIndex"], 2);
        assert_eq!(json["sortOrder"], "desc");
        assert!(json.get("search").is_none());
    }
}
