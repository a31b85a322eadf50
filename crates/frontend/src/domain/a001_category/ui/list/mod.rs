use contracts::domain::a001_category::Category;
use contracts::shared::api::StatusUpdate;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api;
use crate::layout::global_context::use_app_context;
use crate::layout::notifications::use_notifications;
use crate::shared::components::data_table::{DataRow, DataTable, FetchParams, RemoteList, RowActions, TableColumn};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;

impl DataRow for Category {
    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

#[component]
pub fn CategoryListPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::SuperAdmin, Role::Admin, Role::Cms]>
            <CategoryList />
        </RequireRole>
    }
}

#[component]
fn CategoryList() -> impl IntoView {
    let list = RemoteList::<Category>::new();
    let notifications = use_notifications();
    let ctx = use_app_context();

    let fetch_data =
        Callback::new(move |params: FetchParams| list.load(params, api::fetch_category_page));

    let on_toggle_status = Callback::new(move |(category, is_active): (Category, bool)| {
        let update = StatusUpdate {
            id: category.id.clone(),
            is_active,
        };
        spawn_local(async move {
            match api::update_category_status(update).await {
                Ok(()) => {
                    let state = if is_active { "activated" } else { "deactivated" };
                    notifications.success(format!("Category \"{}\" {}", category.name, state));
                    list.reload(api::fetch_category_page);
                }
                Err(e) => notifications.error(Some(&e)),
            }
        });
    });

    let on_edit = Callback::new(move |category: Category| {
        ctx.navigate(&format!("/categories/{}/edit", category.id));
    });

    let columns = vec![
        TableColumn::new("name", "Name").sortable(),
        TableColumn::new("slug", "Slug").sortable(),
        TableColumn::new("parentName", "Parent")
            .render(|c: Category| c.parent_name.unwrap_or_else(|| "-".to_string()).into_any()),
        TableColumn::new("productCount", "Products").sortable(),
        TableColumn::new("updatedAt", "Updated")
            .sortable()
            .render(|c: Category| format_datetime(&c.updated_at).into_any()),
    ];

    let actions = RowActions {
        on_edit: Some(on_edit),
        on_toggle_status: Some(on_toggle_status),
        on_upload_images: None,
    };

    view! {
        <div class="page" id="a001_category--list">
            <PageHeader title="Categories" total_count=Signal::from(list.total_count)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.reload(api::fetch_category_page)
                    disabled=Signal::derive(move || list.is_loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <div class="page__content">
                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <DataTable
                    columns=columns
                    rows=list.rows
                    total_count=list.total_count
                    is_loading=list.is_loading
                    fetch_data=fetch_data
                    actions=actions
                    search_placeholder="Name or slug..."
                />
            </div>
        </div>
    }
}
