use contracts::shared::api::StatusUpdate;
use contracts::system::roles::Role;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::components::data_table::{DataRow, DataTable, FetchParams, RemoteList, RowActions, TableColumn};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireRole;
use crate::system::users::api;

impl DataRow for User {
    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::SuperAdmin, Role::Admin]>
            <UsersList />
        </RequireRole>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let list = RemoteList::<User>::new();
    let notifications = use_notifications();

    let fetch_data = Callback::new(move |params: FetchParams| list.load(params, api::fetch_user_page));

    let on_toggle_status = Callback::new(move |(user, is_active): (User, bool)| {
        let update = StatusUpdate {
            id: user.id.clone(),
            is_active,
        };
        spawn_local(async move {
            match api::update_user_status(update).await {
                Ok(()) => {
                    let verb = if is_active { "unblocked" } else { "blocked" };
                    notifications.success(format!("User {} {}", user.username, verb));
                    list.reload(api::fetch_user_page);
                }
                Err(e) => notifications.error(Some(&e)),
            }
        });
    });

    let columns = vec![
        TableColumn::new("username", "Username").sortable().render(|u: User| {
            view! { <span style="font-weight: 500;">{u.username}</span> }.into_any()
        }),
        TableColumn::new("fullName", "Full name")
            .sortable()
            .render(|u: User| u.full_name.unwrap_or_default().into_any()),
        TableColumn::new("email", "Email")
            .sortable()
            .render(|u: User| u.email.unwrap_or_default().into_any()),
        TableColumn::new("role", "Role").sortable().render(|u: User| {
            let class = match u.role {
                Role::SuperAdmin | Role::Admin => "badge badge--warning",
                _ => "badge badge--neutral",
            };
            view! { <span class=class>{u.role.label().to_string()}</span> }.into_any()
        }),
        TableColumn::new("isActive", "Status").render(|u: User| {
            if u.is_active {
                view! { <span class="badge badge--success">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge badge--error">"Blocked"</span> }.into_any()
            }
        }),
        TableColumn::new("lastLoginAt", "Last login")
            .sortable()
            .render(|u: User| format_datetime_opt(u.last_login_at.as_ref()).into_any()),
    ];

    let actions = RowActions {
        on_toggle_status: Some(on_toggle_status),
        ..RowActions::default()
    };

    view! {
        <div class="page" id="sys_users--list">
            <PageHeader title="Users" total_count=Signal::from(list.total_count)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.reload(api::fetch_user_page)
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
                    search_placeholder="Username, name or email..."
                />
            </div>
        </div>
    }
}
