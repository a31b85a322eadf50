use contracts::domain::a002_product::Product;
use contracts::shared::api::StatusUpdate;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::layout::global_context::use_app_context;
use crate::layout::notifications::use_notifications;
use crate::shared::components::data_table::{DataRow, DataTable, FetchParams, RemoteList, RowActions, TableColumn};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::{format_amount, format_datetime};
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;

impl DataRow for Product {
    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::SuperAdmin, Role::Admin, Role::Cms]>
            <ProductList />
        </RequireRole>
    }
}

#[component]
fn ProductList() -> impl IntoView {
    let list = RemoteList::<Product>::new();
    let notifications = use_notifications();
    let ctx = use_app_context();

    let fetch_data =
        Callback::new(move |params: FetchParams| list.load(params, api::fetch_product_page));

    let on_toggle_status = Callback::new(move |(product, is_active): (Product, bool)| {
        let update = StatusUpdate {
            id: product.id.clone(),
            is_active,
        };
        spawn_local(async move {
            match api::update_product_status(update).await {
                Ok(()) => {
                    let state = if is_active { "activated" } else { "deactivated" };
                    notifications.success(format!("Product {} {}", product.sku, state));
                    list.reload(api::fetch_product_page);
                }
                Err(e) => notifications.error(Some(&e)),
            }
        });
    });

    // editing and image upload live on their own pages
    let on_edit = Callback::new(move |product: Product| {
        ctx.navigate(&format!("/products/{}/edit", product.id));
    });
    let on_upload_images = Callback::new(move |product: Product| {
        ctx.navigate(&format!("/products/{}/images", product.id));
    });

    let columns = vec![
        TableColumn::new("name", "Name").sortable(),
        TableColumn::new("sku", "SKU").sortable(),
        TableColumn::new("categoryName", "Category")
            .render(|p: Product| p.category_name.unwrap_or_else(|| "-".to_string()).into_any()),
        TableColumn::new("price", "Price").sortable().render(|p: Product| {
            view! { <span class="table__cell--number">{format_amount(p.price)}</span> }.into_any()
        }),
        TableColumn::new("stock", "Stock").sortable().render(|p: Product| {
            let class = if p.stock <= 0 { "badge badge--error" } else { "badge badge--neutral" };
            view! { <span class=class>{p.stock}</span> }.into_any()
        }),
        TableColumn::new("imageCount", "Images"),
        TableColumn::new("updatedAt", "Updated")
            .sortable()
            .render(|p: Product| format_datetime(&p.updated_at).into_any()),
    ];

    let actions = RowActions {
        on_edit: Some(on_edit),
        on_toggle_status: Some(on_toggle_status),
        on_upload_images: Some(on_upload_images),
    };

    view! {
        <div class="page" id="a002_product--list">
            <PageHeader title="Products" total_count=Signal::from(list.total_count)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.reload(api::fetch_product_page)
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
                    search_placeholder="Name or SKU..."
                />
            </div>
        </div>
    }
}
