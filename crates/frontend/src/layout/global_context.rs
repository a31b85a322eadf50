use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Route shown when the URL carries none
pub const HOME_ROUTE: &str = "/";

const ROUTE_PARAM: &str = "route";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(HOME_ROUTE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the route from `?route=` and keeps the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(route) = route_from_query(&search) {
            self.navigate(&route);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_route(&this.route.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, route: &str) {
        if self.route.with_untracked(|r| r == route) {
            return;
        }
        leptos::logging::log!("navigate: '{}'", route);
        self.route.set(route.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

/// Route stored in a `?route=...` query string, if any
pub fn route_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ROUTE_PARAM)
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}

pub fn query_for_route(route: &str) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([(ROUTE_PARAM.to_string(), route.to_string())]))
            .unwrap_or_default();
    format!("?{}", query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_round_trips_through_query() {
        let query = query_for_route("/catalog/products");
        assert_eq!(route_from_query(&query).as_deref(), Some("/catalog/products"));
    }

    #[test]
    fn test_missing_or_blank_route() {
        assert_eq!(route_from_query(""), None);
        assert_eq!(route_from_query("?route="), None);
        assert_eq!(route_from_query("?other=1"), None);
    }
}
