use contracts::shared::api::SortOrder;
use serde::Serialize;

/// Column of a data table: the row key it reads and its header label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: String,
    pub header: String,
    pub sortable: bool,
}

impl ColumnDef {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Rows rendered by `DataTable`.
///
/// The serialized form is what default cells and exports read, so key order of
/// the serialized object is the export column order.
pub trait DataRow: Serialize + Clone + Send + Sync + 'static {
    /// Status flag driving the row actions; `None` when the entity has none
    fn is_active(&self) -> Option<bool> {
        None
    }
}

/// What the table body shows instead of (or as) the data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows,
}

impl BodyState {
    pub fn of(is_loading: bool, row_count: usize) -> Self {
        if is_loading {
            BodyState::Loading
        } else if row_count == 0 {
            BodyState::Empty
        } else {
            BodyState::Rows
        }
    }

    /// Export reads the loaded rows, so only a settled, non-empty page exports
    pub fn can_export(self) -> bool {
        self == BodyState::Rows
    }
}

/// Enablement of the action buttons of one row.
///
/// Inactive rows must be re-activated before they can be edited or get images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActionState {
    /// What the status switch shows: the row's stored status, not the click
    pub checked: bool,
    pub toggle_enabled: bool,
    pub next_status: bool,
    pub edit_enabled: bool,
    pub upload_enabled: bool,
}

impl RowActionState {
    pub fn for_row(is_active: bool) -> Self {
        Self {
            checked: is_active,
            toggle_enabled: true,
            next_status: !is_active,
            edit_enabled: is_active,
            upload_enabled: is_active,
        }
    }
}

pub fn sort_indicator(sort_by: Option<&str>, sort_order: SortOrder, key: &str) -> &'static str {
    match sort_by {
        Some(current) if current == key => match sort_order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn sort_class(sort_by: Option<&str>, key: &str) -> &'static str {
    if sort_by == Some(key) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_row_locks_edit_and_upload() {
        let state = RowActionState::for_row(false);
        assert!(!state.checked);
        assert!(state.toggle_enabled);
        assert!(state.next_status);
        assert!(!state.edit_enabled);
        assert!(!state.upload_enabled);
    }

    #[test]
    fn test_active_row_actions() {
        let state = RowActionState::for_row(true);
        assert!(state.checked);
        assert!(state.toggle_enabled);
        assert!(!state.next_status);
        assert!(state.edit_enabled);
        assert!(state.upload_enabled);
    }

    #[test]
    fn test_loading_wins_over_data() {
        assert_eq!(BodyState::of(true, 5), BodyState::Loading);
        assert_eq!(BodyState::of(true, 0), BodyState::Loading);
        assert_eq!(BodyState::of(false, 0), BodyState::Empty);
        assert_eq!(BodyState::of(false, 3), BodyState::Rows);
    }

    #[test]
    fn test_export_waits_for_loaded_page() {
        assert!(!BodyState::of(true, 10).can_export());
        assert!(!BodyState::of(false, 0).can_export());
        assert!(BodyState::of(false, 10).can_export());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some("name"), SortOrder::Asc, "name"), " ▲");
        assert_eq!(sort_indicator(Some("name"), SortOrder::Desc, "name"), " ▼");
        assert_eq!(sort_indicator(Some("name"), SortOrder::Asc, "price"), " ⇅");
        assert_eq!(sort_indicator(None, SortOrder::Asc, "name"), " ⇅");
    }
}
