use contracts::shared::api::StatusUpdate;
use contracts::system::menus::MenuNode;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::components::data_table::{DataRow, DataTable, FetchParams, RemoteList, RowActions, TableColumn};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;
use crate::system::menus::{api, use_menus};

impl DataRow for MenuNode {
    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

fn roles_text(roles: &[Role]) -> String {
    roles.iter().map(Role::label).collect::<Vec<_>>().join(", ")
}

#[component]
pub fn MenuListPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::SuperAdmin, Role::Admin]>
            <MenuList />
        </RequireRole>
    }
}

/// Menu records of every role. Each mutation refreshes the sidebar menus of
/// all loaded roles.
#[component]
fn MenuList() -> impl IntoView {
    let list = RemoteList::<MenuNode>::new();
    let notifications = use_notifications();
    let menus = use_menus();

    let fetch_data = Callback::new(move |params: FetchParams| list.load(params, api::fetch_menu_page));

    let after_mutation = move |text: String| {
        notifications.success(text);
        list.reload(api::fetch_menu_page);
        menus.refresh_menus();
    };

    let on_toggle_status = Callback::new(move |(node, is_active): (MenuNode, bool)| {
        let update = StatusUpdate {
            id: node.id.clone(),
            is_active,
        };
        spawn_local(async move {
            match api::update_menu_status(update).await {
                Ok(()) => {
                    let state = if is_active { "shown" } else { "hidden" };
                    after_mutation(format!("Menu \"{}\" is now {}", node.name, state));
                }
                Err(e) => notifications.error(Some(&e)),
            }
        });
    });

    let delete = move |node: MenuNode| {
        spawn_local(async move {
            match api::delete_menu(&node.id).await {
                Ok(()) => after_mutation(format!("Menu \"{}\" deleted", node.name)),
                Err(e) => notifications.error(Some(&e)),
            }
        });
    };

    let columns = vec![
        TableColumn::new("name", "Name").sortable().render(|m: MenuNode| {
            view! {
                <span class="menu-list__name">
                    {icon(&m.icon)}
                    <span>{m.name}</span>
                </span>
            }
            .into_any()
        }),
        TableColumn::new("link", "Link").sortable(),
        TableColumn::new("parentId", "Parent")
            .render(|m: MenuNode| m.parent_id.unwrap_or_else(|| "-".to_string()).into_any()),
        TableColumn::new("order", "Order").sortable(),
        TableColumn::new("roles", "Roles").render(|m: MenuNode| roles_text(&m.roles).into_any()),
        TableColumn::new("id", "").render(move |m: MenuNode| {
            view! {
                <button class="table__action-btn" title="Delete" on:click=move |_| delete(m.clone())>
                    {icon("close")}
                </button>
            }
            .into_any()
        }),
    ];

    let actions = RowActions {
        on_toggle_status: Some(on_toggle_status),
        ..RowActions::default()
    };

    view! {
        <div class="page" id="sys_menus--list">
            <PageHeader title="Menus" total_count=Signal::from(list.total_count)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| menus.refresh_menus()
                >
                    {icon("refresh")}
                    " Refresh sidebar"
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
                    search_placeholder="Name or link..."
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_text() {
        let roles = vec![Role::Admin, Role::Cms, Role::Other("EDITOR".into())];
        assert_eq!(roles_text(&roles), "Admin, CMS, EDITOR");
        assert_eq!(roles_text(&[]), "");
    }
}
