//! Pagination / sort / search state of one table instance.
//!
//! `TableEngine` is a plain state machine: every mutation returns the
//! parameters the page has to fetch, or `None` when nothing changed. Timers and
//! rendering live in the component; search debounce is expressed with
//! [`SearchTicket`]s so only the last keystroke of a burst settles.

use contracts::shared::api::{ListQuery, SortOrder};
use serde::Deserialize;

use super::columns::ColumnDef;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
    pub search_debounce_ms: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_sizes: vec![10, 20, 50, 100],
            default_page_size: 10,
            search_debounce_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub page_index: usize,
    pub page_size: usize,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub search: String,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
            sort_by: None,
            sort_order: SortOrder::Asc,
            search: String::new(),
        }
    }
}

/// Parameters handed to the page's `fetch_data` callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub request_id: u64,
    pub page_index: usize,
    pub page_size: usize,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub search: String,
}

impl FetchParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            page_index: self.page_index,
            page_size: self.page_size,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
            search: self.search.clone(),
        }
    }
}

/// Pagination control pressed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    First,
    Prev,
    Next,
    Last,
}

/// Handle of one pending debounced search input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone)]
pub struct TableEngine {
    config: TableConfig,
    state: TableState,
    pending_search: Option<(u64, String)>,
    search_generation: u64,
    next_request_id: u64,
}

impl TableEngine {
    pub fn new(config: TableConfig) -> Self {
        let page_size = if config.page_sizes.contains(&config.default_page_size) {
            config.default_page_size
        } else {
            config.page_sizes.first().copied().unwrap_or(10)
        };
        Self {
            state: TableState::new(page_size),
            config,
            pending_search: None,
            search_generation: 0,
            next_request_id: 0,
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Text typed into the search box, including input that has not settled yet
    pub fn search_input(&self) -> &str {
        self.pending_search
            .as_ref()
            .map(|(_, text)| text.as_str())
            .unwrap_or(&self.state.search)
    }

    /// Initial emission when the table mounts
    pub fn mount(&mut self) -> FetchParams {
        self.emit()
    }

    pub fn go_to_page(&mut self, page_index: usize) -> Option<FetchParams> {
        if page_index == self.state.page_index {
            return None;
        }
        self.state.page_index = page_index;
        Some(self.emit())
    }

    pub fn first_page(&mut self) -> Option<FetchParams> {
        self.go_to_page(0)
    }

    pub fn prev_page(&mut self) -> Option<FetchParams> {
        if !can_go_back(self.state.page_index) {
            return None;
        }
        self.go_to_page(self.state.page_index - 1)
    }

    pub fn next_page(&mut self, page_count: usize) -> Option<FetchParams> {
        if !can_go_forward(self.state.page_index, page_count) {
            return None;
        }
        self.go_to_page(self.state.page_index + 1)
    }

    pub fn last_page(&mut self, page_count: usize) -> Option<FetchParams> {
        if !can_go_forward(self.state.page_index, page_count) {
            return None;
        }
        self.go_to_page(page_count - 1)
    }

    pub fn navigate(&mut self, movement: PageMove, page_count: usize) -> Option<FetchParams> {
        match movement {
            PageMove::First => self.first_page(),
            PageMove::Prev => self.prev_page(),
            PageMove::Next => self.next_page(page_count),
            PageMove::Last => self.last_page(page_count),
        }
    }

    /// Page-size change always lands on the first page
    pub fn set_page_size(&mut self, page_size: usize) -> Option<FetchParams> {
        if page_size == self.state.page_size || !self.config.page_sizes.contains(&page_size) {
            return None;
        }
        self.state.page_size = page_size;
        self.state.page_index = 0;
        Some(self.emit())
    }

    /// Tri-state toggle: unsorted -> asc -> desc -> unsorted.
    /// Clicking another column starts it ascending.
    pub fn toggle_sort(&mut self, column: &ColumnDef) -> Option<FetchParams> {
        if !column.sortable {
            return None;
        }
        let key = column.key.as_str();
        match (self.state.sort_by.as_deref(), self.state.sort_order) {
            (Some(current), SortOrder::Asc) if current == key => {
                self.state.sort_order = SortOrder::Desc;
            }
            (Some(current), SortOrder::Desc) if current == key => {
                self.state.sort_by = None;
                self.state.sort_order = SortOrder::Asc;
            }
            _ => {
                self.state.sort_by = Some(key.to_string());
                self.state.sort_order = SortOrder::Asc;
            }
        }
        Some(self.emit())
    }

    /// Records a keystroke. The returned ticket must be settled after the
    /// debounce delay; any later input invalidates it.
    pub fn input_search(&mut self, text: impl Into<String>) -> SearchTicket {
        self.search_generation += 1;
        self.pending_search = Some((self.search_generation, text.into()));
        SearchTicket(self.search_generation)
    }

    pub fn settle_search(&mut self, ticket: SearchTicket) -> Option<FetchParams> {
        let (generation, _) = self.pending_search.as_ref()?;
        if *generation != ticket.0 {
            return None;
        }
        let (_, text) = self.pending_search.take()?;
        if text == self.state.search {
            return None;
        }
        self.state.search = text;
        self.state.page_index = 0;
        Some(self.emit())
    }

    fn emit(&mut self) -> FetchParams {
        self.next_request_id += 1;
        FetchParams {
            request_id: self.next_request_id,
            page_index: self.state.page_index,
            page_size: self.state.page_size,
            sort_by: self.state.sort_by.clone(),
            sort_order: self.state.sort_order,
            search: self.state.search.clone(),
        }
    }
}

/// Remembers the newest issued request so late answers to older ones are dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseGate {
    latest: Option<u64>,
}

impl ResponseGate {
    pub fn issue(&mut self, request_id: u64) {
        self.latest = Some(self.latest.map_or(request_id, |l| l.max(request_id)));
    }

    pub fn accepts(&self, request_id: u64) -> bool {
        self.latest == Some(request_id)
    }
}

pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// 1-based serial of a row, relative to the current page offset
pub fn serial_number(page_index: usize, page_size: usize, local_index: usize) -> usize {
    page_index * page_size + local_index + 1
}

pub fn can_go_back(page_index: usize) -> bool {
    page_index > 0
}

pub fn can_go_forward(page_index: usize, page_count: usize) -> bool {
    page_index + 1 < page_count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TableEngine {
        TableEngine::new(TableConfig::default())
    }

    fn name_column() -> ColumnDef {
        ColumnDef::new("name", "Name").sortable()
    }

    #[test]
    fn test_mount_emits_defaults() {
        let mut engine = engine();
        let params = engine.mount();
        assert_eq!(params.page_index, 0);
        assert_eq!(params.page_size, 10);
        assert_eq!(params.sort_by, None);
        assert_eq!(params.sort_order, SortOrder::Asc);
        assert_eq!(params.search, "");
    }

    #[test]
    fn test_sort_three_cycle() {
        let mut engine = engine();
        let column = name_column();

        let asc = engine.toggle_sort(&column).unwrap();
        assert_eq!(asc.sort_by.as_deref(), Some("name"));
        assert_eq!(asc.sort_order, SortOrder::Asc);

        let desc = engine.toggle_sort(&column).unwrap();
        assert_eq!(desc.sort_by.as_deref(), Some("name"));
        assert_eq!(desc.sort_order, SortOrder::Desc);

        let cleared = engine.toggle_sort(&column).unwrap();
        assert_eq!(cleared.sort_by, None);
        assert_eq!(cleared.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let mut engine = engine();
        engine.toggle_sort(&name_column());
        engine.toggle_sort(&name_column());
        let params = engine
            .toggle_sort(&ColumnDef::new("price", "Price").sortable())
            .unwrap();
        assert_eq!(params.sort_by.as_deref(), Some("price"));
        assert_eq!(params.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_unsortable_column_is_ignored() {
        let mut engine = engine();
        assert!(engine.toggle_sort(&ColumnDef::new("image", "Image")).is_none());
        assert_eq!(engine.state().sort_by, None);
    }

    #[test]
    fn test_search_burst_settles_once() {
        let mut engine = engine();
        engine.mount();
        engine.go_to_page(3).unwrap();

        let first = engine.input_search("s");
        let second = engine.input_search("sh");
        let last = engine.input_search("shoe");

        assert!(engine.settle_search(first).is_none());
        assert!(engine.settle_search(second).is_none());
        let params = engine.settle_search(last).unwrap();
        assert_eq!(params.search, "shoe");
        assert_eq!(params.page_index, 0);
        // a ticket settles only once
        assert!(engine.settle_search(last).is_none());
    }

    #[test]
    fn test_search_back_to_same_text_emits_nothing() {
        let mut engine = engine();
        let ticket = engine.input_search("");
        assert!(engine.settle_search(ticket).is_none());
        assert_eq!(engine.search_input(), "");
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut engine = engine();
        engine.go_to_page(4);
        let params = engine.set_page_size(50).unwrap();
        assert_eq!(params.page_size, 50);
        assert_eq!(params.page_index, 0);
        assert!(engine.set_page_size(50).is_none());
        assert!(engine.set_page_size(7).is_none());
    }

    #[test]
    fn test_one_emission_per_change() {
        let mut engine = engine();
        let mut emitted = vec![engine.mount()];
        let page_count = 5;

        emitted.extend(engine.prev_page());
        emitted.extend(engine.next_page(page_count));
        emitted.extend(engine.next_page(page_count));
        emitted.extend(engine.last_page(page_count));
        emitted.extend(engine.last_page(page_count));
        emitted.extend(engine.next_page(page_count));
        emitted.extend(engine.navigate(PageMove::First, page_count));
        emitted.extend(engine.navigate(PageMove::First, page_count));

        let pages: Vec<usize> = emitted.iter().map(|p| p.page_index).collect();
        assert_eq!(pages, vec![0, 1, 2, 4, 0]);
        let ids: Vec<u64> = emitted.iter().map(|p| p.request_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_navigation_bounds() {
        assert!(!can_go_back(0));
        assert!(can_go_back(1));
        assert!(can_go_forward(0, 2));
        assert!(!can_go_forward(1, 2));
        assert!(!can_go_forward(0, 0));
    }

    #[test]
    fn test_page_count_and_serial() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(21, 10), 3);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(serial_number(2, 10, 0), 21);
        assert_eq!(serial_number(0, 20, 19), 20);
    }

    #[test]
    fn test_response_gate_drops_stale_answers() {
        let mut gate = ResponseGate::default();
        assert!(!gate.accepts(1));
        gate.issue(1);
        gate.issue(2);
        assert!(!gate.accepts(1));
        assert!(gate.accepts(2));
        gate.issue(1);
        assert!(gate.accepts(2));
    }

    #[test]
    fn test_unknown_default_page_size_falls_back() {
        let engine = TableEngine::new(TableConfig {
            page_sizes: vec![25, 50],
            default_page_size: 10,
            search_debounce_ms: 300,
        });
        assert_eq!(engine.state().page_size, 25);
    }
}
