use crate::layout::global_context::use_app_context;
use crate::layout::registry::render_route;
use leptos::prelude::*;

/// Content zone: renders the page registered for the current route
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
            {move || render_route(&ctx.route.get(), ctx)}
        </div>
    }
}
