//! Application Shell - корневые компоненты приложения
//!
//! - `AppShell` - auth gate (waits for session restore, then MainLayout)
//! - `MainLayout` - Shell + Sidebar + routed content

use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use thaw::Spinner;

/// Инициализирует router integration (?route=...).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();
    ctx.init_router_integration();

    view! { <Shell left=|| view! { <Sidebar /> }.into_any() /> }
}

/// Sign-in happens outside the console; without a session only a notice is shown.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=move || {
                if auth_state.with(|s| s.checked) {
                    view! {
                        <div class="auth-required">
                            <h2>"Session required"</h2>
                            <p>"Sign in through the portal, then reload this page."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div class="auth-required"><Spinner /></div> }.into_any()
                }
            }
        >
            <MainLayout />
        </Show>
    }
}
