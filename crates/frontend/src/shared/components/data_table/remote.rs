use contracts::shared::api::{ListQuery, PagedResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use super::state::{FetchParams, ResponseGate};
use crate::layout::notifications::{error_text, Notifications};

/// Page-side holder of a server-paginated list.
///
/// Answers are committed only for the newest issued request; a slow answer
/// to an older page/sort/search never overwrites a fresher one.
pub struct RemoteList<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub total_count: RwSignal<usize>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    gate: RwSignal<ResponseGate>,
    last: RwSignal<Option<FetchParams>>,
    notifications: Option<Notifications>,
}

impl<T: Send + Sync + 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteList<T> {}

impl<T: Send + Sync + 'static> RemoteList<T> {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            total_count: RwSignal::new(0),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            gate: RwSignal::new(ResponseGate::default()),
            last: RwSignal::new(None),
            notifications: use_context::<Notifications>(),
        }
    }

    pub fn load<F, Fut>(self, params: FetchParams, fetch: F)
    where
        F: FnOnce(ListQuery) -> Fut + 'static,
        Fut: Future<Output = Result<PagedResponse<T>, String>> + 'static,
    {
        let request_id = params.request_id;
        let query = params.to_query();
        self.gate.update(|g| g.issue(request_id));
        self.last.set(Some(params));
        self.is_loading.set(true);

        spawn_local(async move {
            let result = fetch(query).await;
            if !self.gate.with_untracked(|g| g.accepts(request_id)) {
                log::debug!("list: dropped answer to stale request #{}", request_id);
                return;
            }
            self.is_loading.set(false);
            match result {
                Ok(page) => {
                    self.rows.set(page.items);
                    self.total_count.set(page.total_count);
                    self.error.set(None);
                }
                Err(e) => {
                    let text = error_text(Some(&e));
                    log::error!("list: request #{} failed: {}", request_id, text);
                    if let Some(n) = self.notifications {
                        n.error(Some(&text));
                    }
                    self.error.set(Some(text));
                }
            }
        });
    }

    /// Re-runs the last request, e.g. after a row was changed
    pub fn reload<F, Fut>(self, fetch: F)
    where
        F: FnOnce(ListQuery) -> Fut + 'static,
        Fut: Future<Output = Result<PagedResponse<T>, String>> + 'static,
    {
        if let Some(params) = self.last.get_untracked() {
            self.load(params, fetch);
        }
    }
}

impl<T: Send + Sync + 'static> Default for RemoteList<T> {
    fn default() -> Self {
        Self::new()
    }
}
