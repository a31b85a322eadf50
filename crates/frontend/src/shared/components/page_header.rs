use leptos::prelude::*;
use thaw::*;

/// Title row of a list page: title, record count badge and page actions
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Dataset-wide count shown next to the title
    #[prop(optional, into)]
    total_count: Option<Signal<usize>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {total_count.map(|count| view! { <Badge>{move || count.get().to_string()}</Badge> })}
            </div>
            <div class="page__header-right">{children()}</div>
        </div>
    }
}
