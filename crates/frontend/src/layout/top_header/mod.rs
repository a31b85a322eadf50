//! TopHeader component - application top navigation bar.
//!
//! Sidebar toggle, console title, menu refresh, signed-in user and logout.

use crate::layout::global_context::use_app_context;
use crate::layout::notifications::use_notifications;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::menus::use_menus;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let menus = use_menus();
    let notifications = use_notifications();
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let refresh_menus = move |_| {
        menus.refresh_menus();
    };

    let logout = move |_| {
        spawn_local(async move {
            if let Err(e) = do_logout(set_auth_state).await {
                log::warn!("logout: {}", e);
                notifications.error(Some(&e));
            }
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Admin Console"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=refresh_menus title="Refresh menu">
                    {icon("refresh")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| {
                            s.user_info
                                .as_ref()
                                .map(|u| u.display_name().to_string())
                                .unwrap_or_else(|| "Guest".to_string())
                        })}
                    </span>
                    {move || auth_state.with(|s| s.role().map(|r| {
                        view! { <span class="badge badge--neutral">{r.label().to_string()}</span> }
                    }))}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
