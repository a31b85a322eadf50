//! Route registry: the single place mapping a route to its page view.

use crate::domain::a001_category::ui::list::CategoryListPage;
use crate::domain::a002_product::ui::list::ProductListPage;
use crate::layout::global_context::{AppGlobalContext, HOME_ROUTE};
use crate::system::menus::ui::list::MenuListPage;
use crate::system::users::ui::list::UsersListPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Panel prefixes menu links may carry ("/admin/products", "/cms/products")
const PANEL_PREFIXES: [&str; 2] = ["/admin", "/cms"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Home,
    Categories,
    Products,
    Users,
    Menus,
    Unknown,
}

impl PageKey {
    pub fn from_route(route: &str) -> Self {
        let mut path = route.trim().trim_end_matches('/').to_ascii_lowercase();
        for prefix in PANEL_PREFIXES {
            if path == prefix {
                path.clear();
                break;
            }
            if let Some(rest) = path.strip_prefix(prefix).filter(|r| r.starts_with('/')) {
                path = rest.to_string();
                break;
            }
        }
        match path.as_str() {
            "" | "/dashboard" => PageKey::Home,
            "/categories" => PageKey::Categories,
            "/products" => PageKey::Products,
            "/users" => PageKey::Users,
            "/menus" => PageKey::Menus,
            _ => PageKey::Unknown,
        }
    }
}

pub fn render_route(route: &str, ctx: AppGlobalContext) -> AnyView {
    match PageKey::from_route(route) {
        PageKey::Home => view! { <HomePage /> }.into_any(),
        PageKey::Categories => view! { <CategoryListPage /> }.into_any(),
        PageKey::Products => view! { <ProductListPage /> }.into_any(),
        PageKey::Users => view! { <UsersListPage /> }.into_any(),
        PageKey::Menus => view! { <MenuListPage /> }.into_any(),
        PageKey::Unknown => {
            log!("⚠️ Unknown route: {}", route);
            view! {
                <div class="placeholder">
                    <p>{format!("\"{}\" is not available in this console yet.", route)}</p>
                    <button class="button" on:click=move |_| ctx.navigate(HOME_ROUTE)>"Back to home"</button>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="page" id="home">
            <div class="page__header">
                <h1 class="page__title">"Welcome"</h1>
            </div>
            <div class="page__content">
                <p>"Pick a section in the sidebar to start."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(PageKey::from_route("/"), PageKey::Home);
        assert_eq!(PageKey::from_route(""), PageKey::Home);
        assert_eq!(PageKey::from_route("/categories"), PageKey::Categories);
        assert_eq!(PageKey::from_route("/products/"), PageKey::Products);
        assert_eq!(PageKey::from_route("/Users"), PageKey::Users);
        assert_eq!(PageKey::from_route("/menus"), PageKey::Menus);
    }

    #[test]
    fn test_panel_prefixes() {
        assert_eq!(PageKey::from_route("/admin/products"), PageKey::Products);
        assert_eq!(PageKey::from_route("/cms/categories"), PageKey::Categories);
        assert_eq!(PageKey::from_route("/admin"), PageKey::Home);
        assert_eq!(PageKey::from_route("/administrators"), PageKey::Unknown);
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(PageKey::from_route("/products/42/edit"), PageKey::Unknown);
        assert_eq!(PageKey::from_route("#"), PageKey::Unknown);
    }
}
