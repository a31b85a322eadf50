use crate::shared::components::data_table::state::{can_go_back, can_go_forward, PageMove};
use crate::shared::config::config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / prev / next / last buttons plus the page size selector
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_navigate: Callback<PageMove>,

    on_page_size_change: Callback<usize>,

    /// Defaults to the configured table page sizes
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| config().table.page_sizes.clone());

    let back_disabled = move || !can_go_back(current_page.get());
    let forward_disabled = move || !can_go_forward(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_navigate.run(PageMove::First)
                disabled=back_disabled
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_navigate.run(PageMove::Prev)
                disabled=back_disabled
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    format!("Page {} of {} ({} total)", page + 1, total, total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_navigate.run(PageMove::Next)
                disabled=forward_disabled
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_navigate.run(PageMove::Last)
                disabled=forward_disabled
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
